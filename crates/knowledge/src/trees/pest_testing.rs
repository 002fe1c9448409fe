//! PestPHP testing patterns.

use crate::node::{PatternLeaf, PatternNode, PatternTree};

pub(crate) fn tree() -> PatternTree {
    PatternTree::build(
        "pest-testing",
        [
            ("structure", structure()),
            ("laravel", laravel()),
            ("expectations", expectations()),
        ],
    )
}

fn structure() -> PatternNode {
    PatternNode::category([
        (
            "feature_test",
            PatternLeaf::new(
                "Feature tests exercise a route end to end. Describe the behavior in the \
                 test name; one assertion theme per test.",
            )
            .snippet(
                r#"it('shows published articles on the index', function () {
    $article = Article::factory()->published()->create();

    $this->get('/articles')
        ->assertOk()
        ->assertSee($article->title);
});"#,
            )
            .tag("pest")
            .tag("feature")
            .into(),
        ),
        (
            "datasets",
            PatternLeaf::new(
                "Run one test body against many inputs with a dataset instead of copying \
                 the test per case.",
            )
            .snippet(
                r#"it('rejects invalid titles', function (string $title) {
    $this->post('/articles', ['title' => $title])
        ->assertSessionHasErrors('title');
})->with([
    '',
    str_repeat('a', 256),
]);"#,
            )
            .tag("pest")
            .into(),
        ),
        (
            "shared_setup",
            PatternLeaf::new(
                "beforeEach runs per test in the file; uses() applies traits like \
                 RefreshDatabase across a directory from Pest.php.",
            )
            .snippet(
                r#"// tests/Pest.php
uses(Tests\TestCase::class, RefreshDatabase::class)->in('Feature');

// In a test file
beforeEach(function () {
    $this->user = User::factory()->create();
    $this->actingAs($this->user);
});"#,
            )
            .tag("pest")
            .into(),
        ),
    ])
}

fn laravel() -> PatternNode {
    PatternNode::category([
        (
            "database_assertions",
            PatternLeaf::new(
                "Assert persisted state directly against the database after write \
                 endpoints; response assertions alone miss silent write failures.",
            )
            .snippet(
                r#"it('stores an article', function () {
    $this->actingAs(User::factory()->create())
        ->post('/articles', ['title' => 'Hello', 'content' => 'Body'])
        ->assertRedirect();

    $this->assertDatabaseHas('articles', ['title' => 'Hello']);
});"#,
            )
            .tag("pest")
            .tag("database")
            .into(),
        ),
        (
            "factories",
            PatternLeaf::new(
                "Express test data with factories and states. Name states after domain \
                 conditions so tests read as requirements.",
            )
            .snippet(
                r#"class ArticleFactory extends Factory
{
    public function definition(): array
    {
        return [
            'title' => fake()->sentence(),
            'content' => fake()->paragraphs(3, true),
            'user_id' => User::factory(),
        ];
    }

    public function published(): static
    {
        return $this->state(['published_at' => now()]);
    }
}"#,
            )
            .tag("pest")
            .tag("factories")
            .into(),
        ),
        (
            "livewire_tests",
            PatternLeaf::new(
                "Test Filament resources through Livewire's test helpers: fill the form, \
                 call the action, assert on the record.",
            )
            .snippet(
                r#"it('creates an article from the admin panel', function () {
    livewire(CreateArticle::class)
        ->fillForm(['title' => 'Hello', 'content' => 'Body'])
        ->call('create')
        ->assertHasNoFormErrors();

    expect(Article::where('title', 'Hello')->exists())->toBeTrue();
});"#,
            )
            .tag("pest")
            .tag("filament")
            .into(),
        ),
    ])
}

fn expectations() -> PatternNode {
    PatternNode::category([
        (
            "chained_expectations",
            PatternLeaf::new(
                "Chain expectations on a single subject; and() keeps related assertions in \
                 one statement without repeating expect().",
            )
            .snippet(
                r#"expect($article)
    ->title->toBe('Hello')
    ->published_at->not->toBeNull()
    ->and($article->tags)->toHaveCount(2);"#,
            )
            .tag("pest")
            .into(),
        ),
        (
            "custom_expectations",
            PatternLeaf::new(
                "Extend the expectation API for domain concepts that recur across the \
                 suite.",
            )
            .snippet(
                r#"// tests/Pest.php
expect()->extend('toBePublished', function () {
    return $this->published_at->not->toBeNull();
});

// Usage
expect($article)->toBePublished();"#,
            )
            .tag("pest")
            .into(),
        ),
    ])
}
