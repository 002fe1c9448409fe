//! FilamentPHP table builder patterns.

use crate::node::{PatternLeaf, PatternNode, PatternTree};

pub(crate) fn tree() -> PatternTree {
    PatternTree::build(
        "filament-tables",
        [
            ("columns", columns()),
            ("filters", filters()),
            ("actions", actions()),
        ],
    )
}

fn columns() -> PatternNode {
    PatternNode::category([
        (
            "text_column",
            PatternLeaf::new(
                "Sortable, searchable text column. Use limit() for long content and \
                 description() to show a secondary line under the value.",
            )
            .snippet(
                r#"Tables\Columns\TextColumn::make('title')
    ->searchable()
    ->sortable()
    ->limit(50)
    ->description(fn (Article $record): string => $record->author->name)"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "badge_column",
            PatternLeaf::new(
                "Render an enum-like value as a colored badge. Map each state to a color \
                 instead of formatting in the accessor.",
            )
            .snippet(
                r#"Tables\Columns\TextColumn::make('status')
    ->badge()
    ->color(fn (string $state): string => match ($state) {
        'draft' => 'gray',
        'review' => 'warning',
        'published' => 'success',
    })"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "relationship_column",
            PatternLeaf::new(
                "Display a related model's attribute with dot notation. Filament joins \
                 automatically; add counts() for aggregate columns.",
            )
            .snippet(
                r#"Tables\Columns\TextColumn::make('category.name')
    ->sortable(),

Tables\Columns\TextColumn::make('tags_count')
    ->counts('tags')
    ->label('Tags')"#,
            )
            .tag("table")
            .tag("relationships")
            .into(),
        ),
        (
            "toggle_column",
            PatternLeaf::new(
                "Inline boolean toggle that writes straight back to the record. Only for \
                 low-risk flags — every flip is an immediate update.",
            )
            .snippet(
                r#"Tables\Columns\ToggleColumn::make('is_featured')
    ->label('Featured')"#,
            )
            .tag("table")
            .into(),
        ),
    ])
}

fn filters() -> PatternNode {
    PatternNode::category([
        (
            "select_filter",
            PatternLeaf::new(
                "Filter rows by a column value or a relationship. Options mirror the form \
                 select; multiple() allows OR-combination.",
            )
            .snippet(
                r#"Tables\Filters\SelectFilter::make('status')
    ->options([
        'draft' => 'Draft',
        'published' => 'Published',
    ]),

Tables\Filters\SelectFilter::make('category')
    ->relationship('category', 'name')
    ->preload()"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "ternary_filter",
            PatternLeaf::new(
                "Three-state filter for nullable booleans and presence checks: all rows, \
                 only true, only false.",
            )
            .snippet(
                r#"Tables\Filters\TernaryFilter::make('published_at')
    ->label('Published')
    ->nullable()
    ->placeholder('All articles')
    ->trueLabel('Published only')
    ->falseLabel('Drafts only')"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "custom_query_filter",
            PatternLeaf::new(
                "Filter backed by an arbitrary query closure. Keep the closure thin and \
                 delegate to a model scope so the logic stays testable.",
            )
            .snippet(
                r#"Tables\Filters\Filter::make('recent')
    ->query(fn (Builder $query): Builder => $query->where(
        'created_at', '>=', now()->subWeek()
    ))
    ->toggle()"#,
            )
            .tag("table")
            .tag("query")
            .into(),
        ),
    ])
}

fn actions() -> PatternNode {
    PatternNode::category([
        (
            "row_actions",
            PatternLeaf::new(
                "Per-row edit/delete actions. Destructive actions get requiresConfirmation so \
                 a stray click cannot drop data.",
            )
            .snippet(
                r#"->actions([
    Tables\Actions\EditAction::make(),
    Tables\Actions\DeleteAction::make()
        ->requiresConfirmation(),
])"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "bulk_actions",
            PatternLeaf::new(
                "Act on the selected rows at once. Custom bulk actions receive the selected \
                 record collection; deselect afterwards.",
            )
            .snippet(
                r#"->bulkActions([
    Tables\Actions\DeleteBulkAction::make(),
    Tables\Actions\BulkAction::make('publish')
        ->action(fn (Collection $records) => $records->each->publish())
        ->deselectRecordsAfterCompletion()
        ->requiresConfirmation(),
])"#,
            )
            .tag("table")
            .into(),
        ),
        (
            "header_actions",
            PatternLeaf::new(
                "Table-level actions such as create or export rendered above the table \
                 header.",
            )
            .snippet(
                r#"->headerActions([
    Tables\Actions\CreateAction::make(),
])"#,
            )
            .tag("table")
            .into(),
        ),
    ])
}
