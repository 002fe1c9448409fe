//! FilamentPHP form builder patterns.

use crate::node::{PatternLeaf, PatternNode, PatternTree};

pub(crate) fn tree() -> PatternTree {
    PatternTree::build(
        "filament-forms",
        [
            ("components", components()),
            ("layout", layout()),
            ("behavior", behavior()),
        ],
    )
}

fn components() -> PatternNode {
    PatternNode::category([
        (
            "text_input",
            PatternLeaf::new(
                "Single-line text input with validation chained fluently. Use maxLength to \
                 mirror the database column size and unique() for columns with unique indexes.",
            )
            .snippet(
                r#"Forms\Components\TextInput::make('title')
    ->required()
    ->maxLength(255)
    ->unique(ignoreRecord: true)
    ->placeholder('Enter article title')"#,
            )
            .tag("form")
            .tag("input")
            .into(),
        ),
        (
            "select",
            PatternLeaf::new(
                "Dropdown bound to a fixed option map or an Eloquent relationship. Prefer \
                 relationship() over manually building option arrays from queries.",
            )
            .snippet(
                r#"Forms\Components\Select::make('status')
    ->options([
        'draft' => 'Draft',
        'review' => 'Under Review',
        'published' => 'Published',
    ])
    ->default('draft')
    ->required(),

Forms\Components\Select::make('category_id')
    ->relationship('category', 'name')
    ->searchable()
    ->preload()"#,
            )
            .when_to_use("For enum-like columns and belongsTo foreign keys.")
            .tag("form")
            .into(),
        ),
        (
            "date_time_picker",
            PatternLeaf::new(
                "Date/time picker for datetime columns. Pair with a datetime cast on the model \
                 so the value round-trips as a Carbon instance.",
            )
            .snippet(
                r#"Forms\Components\DateTimePicker::make('published_at')
    ->label('Publish Date')
    ->seconds(false)
    ->nullable()"#,
            )
            .tag("form")
            .into(),
        ),
        (
            "file_upload",
            PatternLeaf::new(
                "File upload stored on a Laravel filesystem disk. Constrain image uploads with \
                 image() and maxSize; files land in the configured directory.",
            )
            .snippet(
                r#"Forms\Components\FileUpload::make('featured_image')
    ->image()
    ->directory('articles/images')
    ->maxSize(2048)
    ->nullable()"#,
            )
            .tag("form")
            .tag("storage")
            .into(),
        ),
        (
            "rich_editor",
            PatternLeaf::new(
                "Rich text editor for long-form content columns. Span the full width of the \
                 form grid; restrict the toolbar when only basic formatting is wanted.",
            )
            .snippet(
                r#"Forms\Components\RichEditor::make('content')
    ->required()
    ->toolbarButtons(['bold', 'italic', 'link', 'bulletList'])
    ->columnSpan('full')"#,
            )
            .tag("form")
            .into(),
        ),
    ])
}

fn layout() -> PatternNode {
    PatternNode::category([
        (
            "section",
            PatternLeaf::new(
                "Group related fields under a titled section. Sections keep long forms \
                 scannable and can collapse secondary groups like SEO metadata.",
            )
            .snippet(
                r#"Forms\Components\Section::make('Basic Information')
    ->schema([
        Forms\Components\TextInput::make('title')->required(),
        Forms\Components\Select::make('status')->required(),
    ])
    ->columns(2),

Forms\Components\Section::make('SEO')
    ->schema([
        Forms\Components\TextInput::make('meta_title')->maxLength(100),
        Forms\Components\Textarea::make('meta_description')->maxLength(160),
    ])
    ->collapsible()"#,
            )
            .tag("layout")
            .into(),
        ),
        (
            "grid",
            PatternLeaf::new(
                "Control field placement with a column grid. Set columns on the container and \
                 columnSpan on wide fields rather than nesting single-field sections.",
            )
            .snippet(
                r#"Forms\Components\Grid::make(3)
    ->schema([
        Forms\Components\TextInput::make('title')->columnSpan(2),
        Forms\Components\Select::make('status'),
    ])"#,
            )
            .tag("layout")
            .into(),
        ),
        (
            "wizard",
            PatternLeaf::new(
                "Multi-step form for flows with natural phases. Each step validates before the \
                 next becomes available; keep steps to a handful of fields.",
            )
            .snippet(
                r#"Forms\Components\Wizard::make([
    Forms\Components\Wizard\Step::make('Details')
        ->schema([Forms\Components\TextInput::make('title')->required()]),
    Forms\Components\Wizard\Step::make('Content')
        ->schema([Forms\Components\RichEditor::make('content')->required()]),
])"#,
            )
            .when_to_use("Onboarding or publishing flows with distinct phases.")
            .tag("layout")
            .into(),
        ),
    ])
}

fn behavior() -> PatternNode {
    PatternNode::category([
        (
            "reactive_fields",
            PatternLeaf::new(
                "Recompute one field from another as the user types. live() re-renders on \
                 change; afterStateUpdated writes the derived value.",
            )
            .snippet(
                r#"Forms\Components\TextInput::make('title')
    ->live(onBlur: true)
    ->afterStateUpdated(fn (Set $set, ?string $state) => $set('slug', Str::slug($state))),

Forms\Components\TextInput::make('slug')
    ->required()
    ->unique(ignoreRecord: true)"#,
            )
            .tag("livewire")
            .into(),
        ),
        (
            "relationship_fields",
            PatternLeaf::new(
                "Attach belongsToMany relations with a multi-select bound to the relationship. \
                 Filament syncs the pivot table on save — no manual attach calls.",
            )
            .snippet(
                r#"Forms\Components\Select::make('tags')
    ->relationship('tags', 'name')
    ->multiple()
    ->preload()
    ->createOptionForm([
        Forms\Components\TextInput::make('name')->required(),
    ])"#,
            )
            .tag("relationships")
            .into(),
        ),
        (
            "conditional_visibility",
            PatternLeaf::new(
                "Show a field only when another field holds a given value. visible() receives \
                 the current form state through a Get closure.",
            )
            .snippet(
                r#"Forms\Components\DateTimePicker::make('published_at')
    ->visible(fn (Get $get): bool => $get('status') === 'published')
    ->requiredIf('status', 'published')"#,
            )
            .tag("livewire")
            .into(),
        ),
    ])
}
