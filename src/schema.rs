//! Table definitions for the movie dataset, rendered to SQLite DDL.

/// A set of tables, created in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    /// The full DDL script: every `CREATE TABLE` followed by its indexes.
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        for table in &self.tables {
            sql.push_str(&table.create_statement());
            sql.push('\n');
            for index in &table.indexes {
                sql.push_str(&index.create_statement(&table.name));
                sql.push('\n');
            }
        }
        sql
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    /// Composite primary key. Leave empty when a column carries
    /// [`ColumnConstraint::PrimaryKey`].
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
    pub indexes: Vec<IndexDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn foreign_key(mut self, key: ForeignKey) -> Self {
        self.foreign_keys.push(key);
        self
    }

    pub fn index(mut self, index: IndexDefinition) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn create_statement(&self) -> String {
        let mut parts: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        if !self.primary_key.is_empty() {
            parts.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }
        parts.extend(self.foreign_keys.iter().map(ForeignKey::to_sql));
        format!("CREATE TABLE {} ({});", self.name, parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraint::NotNull)
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
    Real,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Real => "REAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub column: String,
    pub foreign_table: String,
    pub foreign_column: String,
    pub on_delete: ForeignKeyAction,
    pub on_update: ForeignKeyAction,
}

impl ForeignKey {
    /// A key that cascades deletes from the referenced row.
    pub fn cascading(column: &str, foreign_table: &str, foreign_column: &str) -> Self {
        Self {
            column: column.to_string(),
            foreign_table: foreign_table.to_string(),
            foreign_column: foreign_column.to_string(),
            on_delete: ForeignKeyAction::Cascade,
            on_update: ForeignKeyAction::NoAction,
        }
    }

    fn to_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {} ON UPDATE {}",
            self.column,
            self.foreign_table,
            self.foreign_column,
            self.on_delete.as_sql(),
            self.on_update.as_sql()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    NoAction,
    Cascade,
}

impl ForeignKeyAction {
    fn as_sql(self) -> &'static str {
        match self {
            ForeignKeyAction::NoAction => "NO ACTION",
            ForeignKeyAction::Cascade => "CASCADE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDefinition {
    pub name: String,
    pub columns: Vec<String>,
}

impl IndexDefinition {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn create_statement(&self, table: &str) -> String {
        format!(
            "CREATE INDEX {} ON {} ({});",
            self.name,
            table,
            self.columns.join(", ")
        )
    }
}

pub const MOVIES: &str = "MOVIES";
pub const MOVIE_RATINGS: &str = "MOVIE_RATINGS";
pub const ACTORS: &str = "ACTORS";
pub const KEYWORDS: &str = "KEYWORDS";
pub const DIRECTORS: &str = "DIRECTORS";
pub const GENRES: &str = "GENRES";
pub const PRODUCTION_COMPANIES: &str = "PRODUCTION_COMPANIES";
pub const MOVIE_ACTORS: &str = "MOVIE_ACTORS";
pub const MOVIE_DIRECTORS: &str = "MOVIE_DIRECTORS";
pub const MOVIE_GENRES: &str = "MOVIE_GENRES";
pub const MOVIE_KEYWORDS: &str = "MOVIE_KEYWORDS";
pub const MOVIE_PRODUCTION_COMPANIES: &str = "MOVIE_PRODUCTION_COMPANIES";

fn primary_id() -> ColumnDefinition {
    ColumnDefinition::new("id", DataType::Integer)
        .constraint(ColumnConstraint::PrimaryKey)
}

/// `id INTEGER PRIMARY KEY` plus one unique, non-null text column.
fn lookup_table(name: &str, column: &str) -> TableDefinition {
    TableDefinition::new(name)
        .column(primary_id())
        .column(
            ColumnDefinition::new(column, DataType::Text)
                .not_null()
                .constraint(ColumnConstraint::Unique),
        )
}

/// Links MOVIES to a lookup table through `movie_id` and `<column>`.
fn join_table(name: &str, column: &str, target: &str) -> TableDefinition {
    TableDefinition::new(name)
        .column(ColumnDefinition::new("movie_id", DataType::Integer).not_null())
        .column(ColumnDefinition::new(column, DataType::Integer).not_null())
        .primary_key(&["movie_id", column])
        .foreign_key(ForeignKey::cascading("movie_id", MOVIES, "id"))
        .foreign_key(ForeignKey::cascading(column, target, "id"))
}

/// Every table of the movie dataset.
pub fn movie_schema() -> Schema {
    let real = |name: &str| ColumnDefinition::new(name, DataType::Real).not_null();
    let text = |name: &str| ColumnDefinition::new(name, DataType::Text).not_null();

    let movies = TableDefinition::new(MOVIES)
        .column(primary_id())
        .column(text("imdb_id").constraint(ColumnConstraint::Unique))
        .column(real("popularity"))
        .column(real("budget"))
        .column(real("budget_adjusted"))
        .column(real("revenue"))
        .column(real("revenue_adjusted"))
        .column(text("original_title"))
        .column(ColumnDefinition::new("homepage", DataType::Text))
        .column(ColumnDefinition::new("tagline", DataType::Text))
        .column(text("overview"))
        .column(ColumnDefinition::new("runtime", DataType::Integer).not_null())
        .column(text("release_date"));

    let ratings = TableDefinition::new(MOVIE_RATINGS)
        .column(ColumnDefinition::new("user_id", DataType::Integer).not_null())
        .column(ColumnDefinition::new("movie_id", DataType::Integer).not_null())
        .column(real("rating"))
        .column(text("time_created"))
        .primary_key(&["user_id", "movie_id"])
        .foreign_key(ForeignKey::cascading("movie_id", MOVIES, "id"))
        .index(IndexDefinition::new("movie_ratings_movie_id_idx", &["movie_id"]));

    Schema::new()
        .add_table(movies)
        .add_table(ratings)
        .add_table(lookup_table(ACTORS, "full_name"))
        .add_table(lookup_table(KEYWORDS, "keyword"))
        .add_table(lookup_table(DIRECTORS, "full_name"))
        .add_table(lookup_table(GENRES, "genre"))
        .add_table(lookup_table(PRODUCTION_COMPANIES, "company_name"))
        .add_table(join_table(MOVIE_ACTORS, "actor_id", ACTORS))
        .add_table(join_table(MOVIE_DIRECTORS, "director_id", DIRECTORS))
        .add_table(join_table(MOVIE_GENRES, "genre_id", GENRES))
        .add_table(join_table(MOVIE_KEYWORDS, "keyword_id", KEYWORDS))
        .add_table(join_table(
            MOVIE_PRODUCTION_COMPANIES,
            "company_id",
            PRODUCTION_COMPANIES,
        ))
}
