//! Laravel API design patterns.

use crate::node::{PatternLeaf, PatternNode, PatternTree};

pub(crate) fn tree() -> PatternTree {
    PatternTree::build(
        "laravel-api",
        [
            ("resources", resources()),
            ("routing", routing()),
            ("auth", auth()),
        ],
    )
}

fn resources() -> PatternNode {
    PatternNode::category([
        (
            "api_resource",
            PatternLeaf::new(
                "Shape JSON output with an API resource instead of returning models \
                 directly. whenLoaded keeps unloaded relations out of the payload.",
            )
            .snippet(
                r#"class ArticleResource extends JsonResource
{
    public function toArray(Request $request): array
    {
        return [
            'id' => $this->id,
            'title' => $this->title,
            'published_at' => $this->published_at?->toIso8601String(),
            'author' => UserResource::make($this->whenLoaded('user')),
            'tags' => TagResource::collection($this->whenLoaded('tags')),
        ];
    }
}"#,
            )
            .tag("api")
            .tag("resource")
            .into(),
        ),
        (
            "resource_collection",
            PatternLeaf::new(
                "Return paginated collections through the resource so meta and links come \
                 along automatically.",
            )
            .snippet(
                r#"public function index()
{
    return ArticleResource::collection(
        Article::with(['user', 'tags'])->latest()->paginate(15)
    );
}"#,
            )
            .tag("api")
            .tag("pagination")
            .into(),
        ),
        (
            "form_request_validation",
            PatternLeaf::new(
                "Move validation out of controllers into form requests. Controllers receive \
                 validated() data only; rules live in one place per endpoint.",
            )
            .snippet(
                r#"class StoreArticleRequest extends FormRequest
{
    public function rules(): array
    {
        return [
            'title' => ['required', 'string', 'max:255'],
            'content' => ['required', 'string'],
            'tags' => ['array'],
            'tags.*' => ['integer', 'exists:tags,id'],
        ];
    }
}"#,
            )
            .tag("validation")
            .into(),
        ),
    ])
}

fn routing() -> PatternNode {
    PatternNode::category([
        (
            "api_routes",
            PatternLeaf::new(
                "Register REST endpoints with apiResource — index/store/show/update/destroy \
                 without the HTML-form routes.",
            )
            .snippet(
                r#"Route::middleware('auth:sanctum')->group(function () {
    Route::apiResource('articles', ArticleController::class);
    Route::apiResource('articles.comments', CommentController::class)
        ->shallow();
});"#,
            )
            .tag("routing")
            .into(),
        ),
        (
            "route_model_binding",
            PatternLeaf::new(
                "Type-hint the model and let the router resolve it. Customize the lookup \
                 column with the colon syntax for slug-addressed resources.",
            )
            .snippet(
                r#"Route::get('/articles/{article:slug}', [ArticleController::class, 'show']);

public function show(Article $article)
{
    return ArticleResource::make($article->load('user'));
}"#,
            )
            .tag("routing")
            .into(),
        ),
        (
            "api_versioning",
            PatternLeaf::new(
                "Version the API through a route prefix and namespaced controllers; keep old \
                 versions routable while clients migrate.",
            )
            .snippet(
                r#"Route::prefix('v1')->group(base_path('routes/api_v1.php'));
Route::prefix('v2')->group(base_path('routes/api_v2.php'));"#,
            )
            .when_to_use("Public APIs with external consumers you cannot force-upgrade.")
            .tag("routing")
            .into(),
        ),
    ])
}

fn auth() -> PatternNode {
    PatternNode::category([
        (
            "sanctum_tokens",
            PatternLeaf::new(
                "Issue personal access tokens with Sanctum for first-party and mobile \
                 clients. Scope abilities per token rather than per user.",
            )
            .snippet(
                r#"$token = $user->createToken('mobile', ['articles:read'])->plainTextToken;

// Protect routes:
Route::middleware(['auth:sanctum', 'ability:articles:read'])
    ->get('/articles', [ArticleController::class, 'index']);"#,
            )
            .tag("auth")
            .into(),
        ),
        (
            "policies",
            PatternLeaf::new(
                "Authorize per-model actions with policies. Controllers call authorize() and \
                 the policy owns the rule; avoids scattering role checks.",
            )
            .snippet(
                r#"class ArticlePolicy
{
    public function update(User $user, Article $article): bool
    {
        return $user->id === $article->user_id;
    }
}

// In the controller:
$this->authorize('update', $article);"#,
            )
            .tag("auth")
            .into(),
        ),
    ])
}
