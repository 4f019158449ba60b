//! Golden results for the queries joining movies with their lookup tables.
//!
//! `sample` runs against the curated fixture shipped in `fixtures/`. The
//! `full_dataset` tests need the complete movie database as `06.db` in the
//! fixtures directory (see `SQL_MOVIES_FIXTURES_DIR`) and are ignored by
//! default.

use sql_movies::queries::*;
use sql_movies::{row, Database, DatabaseConfig};
use tempfile::TempDir;

// The TempDir must outlive the database file it holds.
fn database(fixture: &str, config: DatabaseConfig) -> anyhow::Result<(Database, TempDir)> {
    let dir = TempDir::new()?;
    let db = Database::from_existing(fixture, "07", &config.with_db_dir(dir.path()))?;
    Ok((db, dir))
}

mod sample {
    use super::*;

    fn sample_db() -> anyhow::Result<(Database, TempDir)> {
        database("sample", DatabaseConfig::default())
    }

    #[test]
    fn top_three_directors_by_total_budget() -> anyhow::Result<()> {
        let (db, _dir) = sample_db()?;
        let result = db.select_multiple_rows(TOP_DIRECTORS_BY_TOTAL_BUDGET)?;

        assert_eq!(
            result,
            vec![
                row! { "director" => "David Yates", "total_budget" => 249999999.9 },
                row! { "director" => "Ridley Scott", "total_budget" => 167252544.89 },
                row! { "director" => "Michael Bay", "total_budget" => 157665104.37 },
            ]
        );
        Ok(())
    }

    #[test]
    fn top_keywords_by_appearance() -> anyhow::Result<()> {
        let (db, _dir) = sample_db()?;
        let result = db.select_multiple_rows(TOP_KEYWORDS_BY_APPEARANCE)?;

        // Fewer than ten keywords exist, so LIMIT 10 returns all of them.
        assert_eq!(
            result,
            vec![
                row! { "keyword" => "murder", "count" => 5 },
                row! { "keyword" => "independent film", "count" => 4 },
                row! { "keyword" => "revenge", "count" => 3 },
                row! { "keyword" => "based on novel", "count" => 2 },
                row! { "keyword" => "woman director", "count" => 1 },
            ]
        );
        Ok(())
    }

    #[test]
    fn movie_with_most_actors_groups_by_title() -> anyhow::Result<()> {
        let (db, _dir) = sample_db()?;
        let result = db.select_single_row(MOVIE_WITH_MOST_ACTORS)?;

        // Two different movies are titled "Life": 3 + 1 actors.
        assert_eq!(result, Some(row! { "original_title" => "Life", "count" => 4 }));
        Ok(())
    }

    #[test]
    fn top_genres_by_five_star_ratings() -> anyhow::Result<()> {
        let (db, _dir) = sample_db()?;
        let result = db.select_multiple_rows(TOP_GENRES_BY_FIVE_STAR_RATINGS)?;

        assert_eq!(
            result,
            vec![
                row! { "genre" => "Thriller", "five_stars_count" => 3 },
                row! { "genre" => "Drama", "five_stars_count" => 2 },
                row! { "genre" => "Music", "five_stars_count" => 1 },
            ]
        );
        Ok(())
    }

    #[test]
    fn top_genres_by_average_rating() -> anyhow::Result<()> {
        let (db, _dir) = sample_db()?;
        let result = db.select_multiple_rows(TOP_GENRES_BY_AVERAGE_RATING)?;

        assert_eq!(
            result,
            vec![
                row! { "genre" => "Music", "avg_rating" => 4.5 },
                row! { "genre" => "Drama", "avg_rating" => 4.29 },
                row! { "genre" => "Documentary", "avg_rating" => 4.25 },
            ]
        );
        Ok(())
    }
}

mod full_dataset {
    use super::*;

    fn movie_db() -> anyhow::Result<(Database, TempDir)> {
        database("06", DatabaseConfig::from_env())
    }

    #[test]
    #[ignore = "needs the full movie dataset as fixtures/06.db"]
    fn top_three_directors_by_total_budget() -> anyhow::Result<()> {
        let (db, _dir) = movie_db()?;
        let result = db.select_multiple_rows(TOP_DIRECTORS_BY_TOTAL_BUDGET)?;

        assert_eq!(
            result,
            vec![
                row! { "director" => "Ridley Scott", "total_budget" => 722882143.58 },
                row! { "director" => "Michael Bay", "total_budget" => 518297522.1 },
                row! { "director" => "David Yates", "total_budget" => 504100108.5 },
            ]
        );
        Ok(())
    }

    #[test]
    #[ignore = "needs the full movie dataset as fixtures/06.db"]
    fn top_ten_keywords_by_appearance() -> anyhow::Result<()> {
        let (db, _dir) = movie_db()?;
        let result = db.select_multiple_rows(TOP_KEYWORDS_BY_APPEARANCE)?;

        assert_eq!(
            result,
            vec![
                row! { "keyword" => "woman director", "count" => 162 },
                row! { "keyword" => "independent film", "count" => 115 },
                row! { "keyword" => "based on novel", "count" => 85 },
                row! { "keyword" => "duringcreditsstinger", "count" => 82 },
                row! { "keyword" => "biography", "count" => 78 },
                row! { "keyword" => "murder", "count" => 66 },
                row! { "keyword" => "sex", "count" => 60 },
                row! { "keyword" => "revenge", "count" => 51 },
                row! { "keyword" => "sport", "count" => 50 },
                row! { "keyword" => "high school", "count" => 48 },
            ]
        );
        Ok(())
    }

    #[test]
    #[ignore = "needs the full movie dataset as fixtures/06.db"]
    fn movie_with_most_actors() -> anyhow::Result<()> {
        let (db, _dir) = movie_db()?;
        let result = db.select_single_row(MOVIE_WITH_MOST_ACTORS)?;

        // No single movie has more than 5 actors; "Life" appears three times.
        assert_eq!(result, Some(row! { "original_title" => "Life", "count" => 12 }));
        Ok(())
    }

    #[test]
    #[ignore = "needs the full movie dataset as fixtures/06.db"]
    fn top_genres_by_five_star_ratings() -> anyhow::Result<()> {
        let (db, _dir) = movie_db()?;
        let result = db.select_multiple_rows(TOP_GENRES_BY_FIVE_STAR_RATINGS)?;

        assert_eq!(
            result,
            vec![
                row! { "genre" => "Drama", "five_stars_count" => 15052 },
                row! { "genre" => "Thriller", "five_stars_count" => 11771 },
                row! { "genre" => "Crime", "five_stars_count" => 8670 },
            ]
        );
        Ok(())
    }

    #[test]
    #[ignore = "needs the full movie dataset as fixtures/06.db"]
    fn top_genres_by_average_rating() -> anyhow::Result<()> {
        let (db, _dir) = movie_db()?;
        let result = db.select_multiple_rows(TOP_GENRES_BY_AVERAGE_RATING)?;

        assert_eq!(
            result,
            vec![
                row! { "genre" => "Crime", "avg_rating" => 3.79 },
                row! { "genre" => "Music", "avg_rating" => 3.73 },
                row! { "genre" => "Documentary", "avg_rating" => 3.71 },
            ]
        );
        Ok(())
    }
}
