//! Exercise queries joining the movie tables.
//!
//! Each query is plain SQL text, run unchanged against any seeded copy of
//! the dataset. Column aliases are part of the expected result.

/// Top three directors by the summed adjusted budget of their movies.
///
/// Columns: `director`, `total_budget` (rounded to 2 decimals).
pub const TOP_DIRECTORS_BY_TOTAL_BUDGET: &str = r#"
    SELECT t3.full_name AS director, ROUND(SUM(t2.budget_adjusted), 2) AS total_budget
    FROM MOVIE_DIRECTORS t1
    LEFT JOIN MOVIES AS t2
    ON t2.id = t1.movie_id
    LEFT JOIN DIRECTORS AS t3
    ON t3.id = t1.director_id
    GROUP BY t1.director_id
    ORDER BY ROUND(SUM(t2.budget_adjusted), 2) DESC
    LIMIT 3;
"#;

/// Top ten keywords by the number of movies tagged with them.
///
/// Columns: `keyword`, `count`.
pub const TOP_KEYWORDS_BY_APPEARANCE: &str = r#"
    SELECT t3.keyword AS keyword, COUNT(*) AS count
    FROM MOVIE_KEYWORDS t1
    LEFT JOIN MOVIES AS t2
    ON t2.id = t1.movie_id
    LEFT JOIN KEYWORDS AS t3
    ON t3.id = t1.keyword_id
    GROUP BY t1.keyword_id
    ORDER BY count DESC
    LIMIT 10;
"#;

/// The title credited with the most actors.
///
/// Groups by title, so distinct movies sharing a title are counted
/// together. Columns: `original_title`, `count`.
pub const MOVIE_WITH_MOST_ACTORS: &str = r#"
    SELECT t2.original_title AS original_title, COUNT(*) AS count
    FROM MOVIE_ACTORS t1
    LEFT JOIN MOVIES AS t2
    ON t2.id = t1.movie_id
    GROUP BY t2.original_title
    ORDER BY count DESC
    LIMIT 1;
"#;

/// Three genres with the most ratings of five stars.
///
/// Columns: `genre`, `five_stars_count`.
pub const TOP_GENRES_BY_FIVE_STAR_RATINGS: &str = r#"
    SELECT t3.genre AS genre, COUNT(*) AS five_stars_count
    FROM MOVIE_GENRES t1
    LEFT JOIN MOVIE_RATINGS AS t2
    ON t2.movie_id = t1.movie_id
    LEFT JOIN GENRES AS t3
    ON t3.id = t1.genre_id
    WHERE t2.rating >= 5
    GROUP BY t1.genre_id
    ORDER BY five_stars_count DESC
    LIMIT 3;
"#;

/// Top three genres by average rating.
///
/// Columns: `genre`, `avg_rating` (rounded to 2 decimals).
pub const TOP_GENRES_BY_AVERAGE_RATING: &str = r#"
    SELECT t3.genre AS genre, ROUND(AVG(t2.rating), 2) AS avg_rating
    FROM MOVIE_GENRES t1
    LEFT JOIN MOVIE_RATINGS AS t2
    ON t2.movie_id = t1.movie_id
    LEFT JOIN GENRES AS t3
    ON t3.id = t1.genre_id
    GROUP BY t1.genre_id
    ORDER BY avg_rating DESC
    LIMIT 3;
"#;
