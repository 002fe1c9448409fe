//! Laravel Eloquent and database patterns.

use crate::node::{PatternLeaf, PatternNode, PatternTree};

pub(crate) fn tree() -> PatternTree {
    PatternTree::build(
        "laravel-database",
        [
            ("eloquent", eloquent()),
            ("migrations", migrations()),
            ("querying", querying()),
        ],
    )
}

fn eloquent() -> PatternNode {
    PatternNode::category([
        (
            "model_conventions",
            PatternLeaf::new(
                "Models are singular PascalCase over plural snake_case tables. Declare \
                 fillable and casts explicitly; use SoftDeletes where rows must be \
                 recoverable.",
            )
            .snippet(
                r#"class Article extends Model
{
    use HasFactory, SoftDeletes;

    protected $fillable = ['title', 'content', 'user_id', 'published_at'];

    protected $casts = [
        'published_at' => 'datetime',
    ];
}"#,
            )
            .tag("eloquent")
            .tag("conventions")
            .into(),
        ),
        (
            "relationships",
            PatternLeaf::new(
                "Define relationships as methods returning the relation object; Laravel \
                 infers keys from naming conventions.",
            )
            .snippet(
                r#"public function user()
{
    return $this->belongsTo(User::class);
}

public function tags()
{
    return $this->belongsToMany(Tag::class);
}

public function comments()
{
    return $this->hasMany(Comment::class)->latest();
}"#,
            )
            .tag("eloquent")
            .tag("relationships")
            .into(),
        ),
        (
            "query_scopes",
            PatternLeaf::new(
                "Name recurring query fragments as local scopes so call sites read as a \
                 sentence and the condition lives in one place.",
            )
            .snippet(
                r#"public function scopePublished(Builder $query): Builder
{
    return $query->whereNotNull('published_at');
}

// Usage:
Article::published()->latest()->paginate(10);"#,
            )
            .tag("eloquent")
            .tag("query")
            .into(),
        ),
        (
            "observers",
            PatternLeaf::new(
                "React to model lifecycle events in an observer class instead of boot() \
                 closures once more than one event is handled.",
            )
            .snippet(
                r#"class ArticleObserver
{
    public function creating(Article $article): void
    {
        $article->slug ??= Str::slug($article->title);
    }
}

// In a service provider:
Article::observe(ArticleObserver::class);"#,
            )
            .tag("eloquent")
            .into(),
        ),
    ])
}

fn migrations() -> PatternNode {
    PatternNode::category([
        (
            "create_table",
            PatternLeaf::new(
                "One focused migration per table, up() and down() both implemented. Index \
                 the columns your queries filter and sort on.",
            )
            .snippet(
                r#"public function up(): void
{
    Schema::create('articles', function (Blueprint $table) {
        $table->id();
        $table->string('title');
        $table->text('content');
        $table->foreignId('user_id')->constrained()->cascadeOnDelete();
        $table->timestamp('published_at')->nullable()->index();
        $table->timestamps();
        $table->softDeletes();
    });
}

public function down(): void
{
    Schema::dropIfExists('articles');
}"#,
            )
            .tag("migration")
            .tag("schema")
            .into(),
        ),
        (
            "pivot_table",
            PatternLeaf::new(
                "Pivot tables get their own migration, named from both singular table names \
                 in alphabetical order.",
            )
            .snippet(
                r#"Schema::create('article_tag', function (Blueprint $table) {
    $table->foreignId('article_id')->constrained()->cascadeOnDelete();
    $table->foreignId('tag_id')->constrained()->cascadeOnDelete();
    $table->primary(['article_id', 'tag_id']);
});"#,
            )
            .tag("migration")
            .tag("relationships")
            .into(),
        ),
        (
            "column_changes",
            PatternLeaf::new(
                "Alter columns in a fresh migration rather than editing a shipped one; \
                 shipped migrations are history, not state.",
            )
            .snippet(
                r#"Schema::table('articles', function (Blueprint $table) {
    $table->string('title', 500)->change();
    $table->string('subtitle')->nullable()->after('title');
});"#,
            )
            .tag("migration")
            .into(),
        ),
    ])
}

fn querying() -> PatternNode {
    PatternNode::category([
        (
            "eager_loading",
            PatternLeaf::new(
                "Load relations up front with with() to avoid N+1 queries; constrain the \
                 eager load when only a slice of the relation is needed.",
            )
            .snippet(
                r#"$articles = Article::with([
    'user',
    'comments' => fn ($query) => $query->latest()->limit(3),
])->published()->get();"#,
            )
            .tag("query")
            .tag("performance")
            .into(),
        ),
        (
            "chunking",
            PatternLeaf::new(
                "Process large tables in chunks to bound memory. chunkById is safe when the \
                 loop mutates rows the query would otherwise re-select.",
            )
            .snippet(
                r#"Article::where('published_at', '<', now()->subYears(2))
    ->chunkById(500, function (Collection $articles) {
        $articles->each->archive();
    });"#,
            )
            .tag("query")
            .tag("performance")
            .into(),
        ),
        (
            "aggregates",
            PatternLeaf::new(
                "Push counts and sums into the query with withCount/withSum instead of \
                 loading collections to count them in PHP.",
            )
            .snippet(
                r#"$users = User::withCount('articles')
    ->withSum('articles as total_views', 'views')
    ->orderByDesc('articles_count')
    ->get();"#,
            )
            .tag("query")
            .into(),
        ),
    ])
}
