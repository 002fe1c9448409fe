//! The built-in command catalog.
//!
//! Content mirrors the artisan/composer commands a Laravel developer reaches
//! for daily, grouped by workflow. Categories and commands keep their
//! authoring order; indexes into a category are 1-based, matching how the
//! list is displayed.

use serde::Serialize;

use crate::fill;

/// A named command template, possibly containing `{placeholder}` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandTemplate {
    pub name: &'static str,
    pub template: &'static str,
}

/// An ordered group of command templates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub description: &'static str,
    pub commands: &'static [CommandTemplate],
}

/// The full catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandCatalog {
    categories: &'static [Category],
}

impl CommandCatalog {
    /// The ordered categories.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Look up a category by key. Unknown key → `None`.
    pub fn category(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Resolve a category given either its key or its 1-based display
    /// number, the way the interactive picker accepts input.
    pub fn resolve_category(&self, input: &str) -> Option<&'static Category> {
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|i| self.categories.get(i));
        }
        self.category(input)
    }

    /// The commands in a category. Unknown key → `None`.
    pub fn commands(&self, key: &str) -> Option<&'static [CommandTemplate]> {
        self.category(key).map(|c| c.commands)
    }

    /// Generate a command from a category and 1-based index, substituting
    /// placeholder values via `value_for`.
    ///
    /// Unknown category or out-of-range index → `None`; `value_for` is not
    /// called in that case.
    pub fn generate(
        &self,
        category: &str,
        index: usize,
        value_for: impl FnMut(&str) -> String,
    ) -> Option<String> {
        let commands = self.commands(category)?;
        let template = index.checked_sub(1).and_then(|i| commands.get(i))?;
        Some(fill(template.template, value_for))
    }
}

/// The built-in catalog instance.
pub fn builtin_catalog() -> CommandCatalog {
    CommandCatalog {
        categories: CATEGORIES,
    }
}

static CATEGORIES: &[Category] = &[
    Category {
        key: "artisan",
        description: "Laravel Artisan commands",
        commands: &[
            CommandTemplate { name: "List commands", template: "php artisan list" },
            CommandTemplate { name: "Clear cache", template: "php artisan cache:clear" },
            CommandTemplate { name: "Clear config cache", template: "php artisan config:clear" },
            CommandTemplate { name: "Clear route cache", template: "php artisan route:clear" },
            CommandTemplate { name: "Clear view cache", template: "php artisan view:clear" },
            CommandTemplate { name: "Maintenance mode on", template: "php artisan down" },
            CommandTemplate { name: "Maintenance mode off", template: "php artisan up" },
            CommandTemplate { name: "Optimize", template: "php artisan optimize" },
            CommandTemplate { name: "Generate app key", template: "php artisan key:generate" },
        ],
    },
    Category {
        key: "migration",
        description: "Database migrations",
        commands: &[
            CommandTemplate { name: "Create migration", template: "php artisan make:migration {name}" },
            CommandTemplate { name: "Run migrations", template: "php artisan migrate" },
            CommandTemplate { name: "Rollback last migration", template: "php artisan migrate:rollback" },
            CommandTemplate { name: "Reset all migrations", template: "php artisan migrate:reset" },
            CommandTemplate { name: "Refresh all migrations", template: "php artisan migrate:refresh" },
            CommandTemplate { name: "Refresh with seed", template: "php artisan migrate:refresh --seed" },
            CommandTemplate { name: "Show migration status", template: "php artisan migrate:status" },
        ],
    },
    Category {
        key: "model",
        description: "Eloquent models",
        commands: &[
            CommandTemplate { name: "Create model", template: "php artisan make:model {name}" },
            CommandTemplate { name: "Create model with migration", template: "php artisan make:model {name} -m" },
            CommandTemplate { name: "Create model with factory", template: "php artisan make:model {name} -f" },
            CommandTemplate { name: "Create model with seeder", template: "php artisan make:model {name} -s" },
            CommandTemplate { name: "Create model with all", template: "php artisan make:model {name} -mfs" },
            CommandTemplate { name: "Create model with controller", template: "php artisan make:model {name} -c" },
        ],
    },
    Category {
        key: "controller",
        description: "Controllers",
        commands: &[
            CommandTemplate { name: "Create controller", template: "php artisan make:controller {name}Controller" },
            CommandTemplate { name: "Create resource controller", template: "php artisan make:controller {name}Controller --resource" },
            CommandTemplate { name: "Create API controller", template: "php artisan make:controller {name}Controller --api" },
            CommandTemplate { name: "Create invokable controller", template: "php artisan make:controller {name}Controller --invokable" },
        ],
    },
    Category {
        key: "resource",
        description: "Resources & APIs",
        commands: &[
            CommandTemplate { name: "Create resource", template: "php artisan make:resource {name}Resource" },
            CommandTemplate { name: "Create resource collection", template: "php artisan make:resource {name}Collection" },
            CommandTemplate { name: "Create API resource collection", template: "php artisan make:resource {name}Resource --collection" },
        ],
    },
    Category {
        key: "filament",
        description: "Filament PHP commands",
        commands: &[
            CommandTemplate { name: "Create Filament resource", template: "php artisan make:filament-resource {name}" },
            CommandTemplate { name: "Create Filament resource with soft deletes", template: "php artisan make:filament-resource {name} --soft-deletes" },
            CommandTemplate { name: "Create Filament page", template: "php artisan make:filament-page {name}" },
            CommandTemplate { name: "Create Filament widget", template: "php artisan make:filament-widget {name}" },
            CommandTemplate { name: "Create Filament relation manager", template: "php artisan make:filament-relation-manager {model} {relationship}" },
            CommandTemplate { name: "Create Filament theme", template: "php artisan make:filament-theme" },
            CommandTemplate { name: "Create Filament user", template: "php artisan make:filament-user" },
        ],
    },
    Category {
        key: "pest",
        description: "Pest PHP testing",
        commands: &[
            CommandTemplate { name: "Create feature test", template: "php artisan make:test {name}Test" },
            CommandTemplate { name: "Create unit test", template: "php artisan make:test {name}Test --unit" },
            CommandTemplate { name: "Run tests", template: "./vendor/bin/pest" },
            CommandTemplate { name: "Run tests with coverage", template: "./vendor/bin/pest --coverage" },
        ],
    },
    Category {
        key: "composer",
        description: "Composer commands",
        commands: &[
            CommandTemplate { name: "Install dependencies", template: "composer install" },
            CommandTemplate { name: "Update dependencies", template: "composer update" },
            CommandTemplate { name: "Require package", template: "composer require {package}" },
            CommandTemplate { name: "Require dev package", template: "composer require --dev {package}" },
            CommandTemplate { name: "Remove package", template: "composer remove {package}" },
            CommandTemplate { name: "Show installed packages", template: "composer show" },
            CommandTemplate { name: "Dump autoload", template: "composer dump-autoload" },
            CommandTemplate { name: "Validate composer.json", template: "composer validate" },
        ],
    },
];
