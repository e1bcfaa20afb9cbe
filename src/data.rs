use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use polars::prelude::*;
use tracing::info;

use crate::error::{CatalogError, Result};

/// Locations of the three tables. `.csv` and `.parquet` are accepted.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub movies: PathBuf,
    pub cast: PathBuf,
    pub crew: PathBuf,
}

impl DatasetPaths {
    pub fn in_dir(dir: impl AsRef<Path>, movies: &str, cast: &str, crew: &str) -> Self {
        let dir = dir.as_ref();
        DatasetPaths {
            movies: dir.join(movies),
            cast: dir.join(cast),
            crew: dir.join(crew),
        }
    }
}

/// The tables as read from disk, before type normalisation.
pub struct MovieFrames {
    pub movies: DataFrame,
    pub cast: DataFrame,
    pub crew: DataFrame,
}

impl MovieFrames {
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        Ok(MovieFrames {
            movies: read_table(&paths.movies)?,
            cast: read_table(&paths.cast)?,
            crew: read_table(&paths.crew)?,
        })
    }
}

fn read_table(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let open = || {
        File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let df = match extension.as_deref() {
        // Schema inference is off so every column arrives as String; the
        // normalise_* pipelines decide the types.
        Some("csv") => CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(open()?)
            .finish()?,
        Some("parquet") => ParquetReader::new(open()?).finish()?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(df)
}

// Exports sometimes write integer ids as `862.0`, hence the trip through Float64.
fn id_col(name: &str) -> Expr {
    col(name).cast(DataType::Float64).cast(DataType::Int64)
}

fn float_col(name: &str) -> Expr {
    col(name).cast(DataType::Float64)
}

fn str_col(name: &str) -> Expr {
    col(name).cast(DataType::String)
}

fn normalise_movies(df: &DataFrame) -> PolarsResult<DataFrame> {
    // CSV input arrives as text; Parquet exports may carry a typed date or a
    // datetime (what `to_datetime` writes). Raw text is always `YYYY-MM-DD`
    // for typed input.
    let (release_date, release_date_raw) = match df.column("release_date")?.dtype() {
        DataType::Date => (col("release_date"), str_col("release_date")),
        DataType::Datetime(_, _) => {
            let date = col("release_date").cast(DataType::Date);
            (date.clone(), date.cast(DataType::String))
        }
        _ => {
            let parsed = str_col("release_date").str().to_date(StrptimeOptions {
                format: Some("%Y-%m-%d".into()),
                strict: false,
                ..Default::default()
            });
            (parsed, str_col("release_date"))
        }
    };

    df.clone()
        .lazy()
        .select([
            id_col("id"),
            str_col("title"),
            release_date_raw.alias("release_date_raw"),
            release_date.alias("release_date"),
            float_col("vote_average"),
            float_col("vote_count"),
            float_col("budget"),
            float_col("revenue"),
            float_col("return"),
        ])
        .collect()
}

fn normalise_cast(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .select([id_col("movie_id"), str_col("actor_name")])
        .collect()
}

fn normalise_crew(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .select([id_col("movie_id"), str_col("crew_name"), str_col("job")])
        .collect()
}

fn strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    Ok(df
        .column(name)?
        .str()?
        .into_iter()
        .map(|opt| opt.map(|s| s.to_string()))
        .collect())
}

fn floats(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    Ok(df.column(name)?.f64()?.into_iter().collect())
}

fn ids(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    Ok(df.column(name)?.i64()?.into_iter().collect())
}

// movies_dataset_sumario
//     id integer,
//     title text,
//     release_date date,      -- text must be YYYY-MM-DD; other forms
//                             -- (e.g. 1995/10/30) and garbage are null
//     vote_average double,
//     vote_count double,
//     budget double,
//     revenue double,
//     return double           -- revenue / budget, null when budget is 0

pub struct Films {
    pub id: Vec<Option<i64>>,
    pub title: Vec<Option<String>>,
    pub release_date: Vec<Option<NaiveDate>>,
    pub release_date_raw: Vec<Option<String>>,
    pub vote_average: Vec<Option<f64>>,
    pub vote_count: Vec<Option<f64>>,
    pub budget: Vec<Option<f64>>,
    pub revenue: Vec<Option<f64>>,
    pub return_: Vec<Option<f64>>,
}

// cast_desanidado
//     movie_id integer,      -- references movies_dataset_sumario.id
//     actor_name text

pub struct Cast {
    pub movie_id: Vec<Option<i64>>,
    pub actor_name: Vec<Option<String>>,
}

// directores_desanidado
//     movie_id integer,      -- references movies_dataset_sumario.id
//     crew_name text,
//     job text

pub struct Crew {
    pub movie_id: Vec<Option<i64>>,
    pub crew_name: Vec<Option<String>>,
    pub job: Vec<Option<String>>,
}

impl Films {
    fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        Ok(Films {
            id: ids(df, "id")?,
            title: strings(df, "title")?,
            release_date: df
                .column("release_date")?
                .as_materialized_series()
                .date()?
                .as_date_iter()
                .collect(),
            release_date_raw: strings(df, "release_date_raw")?,
            vote_average: floats(df, "vote_average")?,
            vote_count: floats(df, "vote_count")?,
            budget: floats(df, "budget")?,
            revenue: floats(df, "revenue")?,
            return_: floats(df, "return")?,
        })
    }

    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Row of the first film whose title equals `title`, ignoring case.
    pub fn find_title(&self, title: &str) -> Option<usize> {
        let title = title.to_lowercase();
        self.title
            .iter()
            .position(|t| t.as_deref().is_some_and(|t| t.to_lowercase() == title))
    }

    /// Inner join of `movie_ids` against the film ids. For each id in order,
    /// every film row carrying it, in load order. Unknown ids produce nothing.
    pub fn join_rows(&self, movie_ids: &[i64]) -> Vec<usize> {
        let wanted: ahash::HashSet<i64> = movie_ids.iter().copied().collect();

        let mut rows_by_id: ahash::HashMap<i64, Vec<usize>> = ahash::HashMap::default();
        for (row, id) in self.id.iter().enumerate() {
            if let Some(id) = id
                && wanted.contains(id)
            {
                rows_by_id.entry(*id).or_default().push(row);
            }
        }

        movie_ids
            .iter()
            .filter_map(|id| rows_by_id.get(id))
            .flatten()
            .copied()
            .collect()
    }
}

impl Cast {
    fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        Ok(Cast {
            movie_id: ids(df, "movie_id")?,
            actor_name: strings(df, "actor_name")?,
        })
    }

    pub fn len(&self) -> usize {
        self.movie_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movie_id.is_empty()
    }
}

impl Crew {
    fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        Ok(Crew {
            movie_id: ids(df, "movie_id")?,
            crew_name: strings(df, "crew_name")?,
            job: strings(df, "job")?,
        })
    }

    pub fn len(&self) -> usize {
        self.movie_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movie_id.is_empty()
    }
}

/// Read-only tables shared by every query.
pub struct Catalog {
    pub films: Films,
    pub cast: Cast,
    pub crew: Crew,
}

impl Catalog {
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let start = Instant::now();
        let frames = MovieFrames::load(paths)?;
        let catalog = Catalog::from_frames(&frames)?;

        info!(
            films = catalog.films.len(),
            cast = catalog.cast.len(),
            crew = catalog.crew.len(),
            elapsed = ?start.elapsed(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_frames(frames: &MovieFrames) -> PolarsResult<Self> {
        Ok(Catalog {
            films: Films::from_frame(&normalise_movies(&frames.movies)?)?,
            cast: Cast::from_frame(&normalise_cast(&frames.cast)?)?,
            crew: Crew::from_frame(&normalise_crew(&frames.crew)?)?,
        })
    }
}


#[cfg(test)]
mod test_data {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalised_columns() {
        let catalog = fixture::catalog();
        let films = &catalog.films;

        assert_eq!(films.len(), 9);
        assert_eq!(films.release_date_raw[8], None);
        assert_eq!(films.id[0], Some(862));
        assert_eq!(films.release_date[0], NaiveDate::from_ymd_opt(1995, 10, 30));
        assert_eq!(films.release_date[6], None);
        assert_eq!(films.release_date_raw[6].as_deref(), Some("not a date"));
        assert_eq!(films.vote_count[0], Some(5415.0));
        assert_eq!(films.budget[5], None);
        assert_eq!(films.return_[1], Some(5.159579775));

        assert_eq!(catalog.cast.len(), 6);
        assert_eq!(catalog.crew.len(), 10);
        assert_eq!(catalog.crew.job[2].as_deref(), Some("Screenplay"));
    }

    #[test]
    fn test_find_title_first_match() {
        let films = fixture::catalog().films;
        assert_eq!(films.find_title("toy story"), Some(0));
        assert_eq!(films.find_title("INCEPTION"), Some(1));
        assert_eq!(films.find_title("Toy"), None);
    }

    #[test]
    fn test_join_rows_is_inner_and_ordered() {
        let films = fixture::catalog().films;
        assert_eq!(films.join_rows(&[500, 999999, 862]), vec![5, 0]);
        assert_eq!(films.join_rows(&[424242]), Vec::<usize>::new());
        assert_eq!(films.join_rows(&[11, 11]), vec![4, 4]);
    }

    #[test]
    fn test_join_rows_duplicate_film_ids() -> PolarsResult<()> {
        let mut frames = fixture::frames();
        frames.movies = df!(
            "id" => ["1", "2", "1"],
            "title" => ["A", "B", "A bis"],
            "release_date" => ["2000-01-01", "2000-01-02", "2000-01-03"],
            "vote_average" => ["1", "2", "3"],
            "vote_count" => ["1", "2", "3"],
            "budget" => ["1", "2", "3"],
            "revenue" => ["1", "2", "3"],
            "return" => ["1", "2", "3"],
        )?;
        let catalog = Catalog::from_frames(&frames)?;
        assert_eq!(catalog.films.join_rows(&[1, 2]), vec![0, 2, 1]);
        Ok(())
    }

    #[test]
    fn test_load_csv() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let mut movies = File::create(dir.path().join("movies.csv"))?;
        writeln!(
            movies,
            "id,title,release_date,vote_average,vote_count,budget,revenue,return"
        )?;
        writeln!(movies, "27205,Inception,2010-07-16,8.3,14075,160000000,825532764,5.159579775")?;
        writeln!(movies, "600,Lost Film,1995-13-45,7.0,12,0,0,")?;

        let mut cast = File::create(dir.path().join("cast.csv"))?;
        writeln!(cast, "movie_id,actor_name")?;
        writeln!(cast, "27205,Leonardo DiCaprio")?;

        let mut crew = File::create(dir.path().join("crew.csv"))?;
        writeln!(crew, "movie_id,crew_name,job")?;
        writeln!(crew, "27205.0,Christopher Nolan,Director")?;

        let paths = DatasetPaths::in_dir(dir.path(), "movies.csv", "cast.csv", "crew.csv");
        let catalog = Catalog::load(&paths)?;

        assert_eq!(catalog.films.len(), 2);
        assert_eq!(catalog.films.title[0].as_deref(), Some("Inception"));
        assert_eq!(catalog.films.release_date[0], NaiveDate::from_ymd_opt(2010, 7, 16));
        assert_eq!(catalog.films.release_date[1], None);
        assert_eq!(catalog.films.return_[1], None);
        assert_eq!(catalog.cast.movie_id, vec![Some(27205)]);
        assert_eq!(catalog.crew.movie_id, vec![Some(27205)]);
        Ok(())
    }

    fn write_parquet(path: &Path, df: &mut DataFrame) -> PolarsResult<()> {
        let file = File::create(path)?;
        ParquetWriter::new(file).finish(df)?;
        Ok(())
    }

    /// Typed Parquet tables: numeric ids and votes, and a release date column
    /// stored with `date_type`.
    fn load_typed_parquet(date_type: DataType) -> std::result::Result<Catalog, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let mut movies = df!(
            "id" => [27205i64, 600],
            "title" => ["Inception", "Lost Film"],
            "release_date" => [Some("2010-07-16"), None],
            "vote_average" => [8.3f64, 7.0],
            "vote_count" => [14075i64, 12],
            "budget" => [160000000.0f64, 0.0],
            "revenue" => [825532764.0f64, 0.0],
            "return" => [Some(5.159579775f64), None],
        )?
        .lazy()
        .with_column(
            col("release_date")
                .str()
                .to_date(StrptimeOptions {
                    format: Some("%Y-%m-%d".into()),
                    ..Default::default()
                })
                .cast(date_type),
        )
        .collect()?;
        let mut cast = df!(
            "movie_id" => [27205i64],
            "actor_name" => ["Leonardo DiCaprio"],
        )?;
        let mut crew = df!(
            "movie_id" => [27205i64],
            "crew_name" => ["Christopher Nolan"],
            "job" => ["Director"],
        )?;

        write_parquet(&dir.path().join("movies.parquet"), &mut movies)?;
        write_parquet(&dir.path().join("cast.parquet"), &mut cast)?;
        write_parquet(&dir.path().join("crew.parquet"), &mut crew)?;

        let paths =
            DatasetPaths::in_dir(dir.path(), "movies.parquet", "cast.parquet", "crew.parquet");
        Ok(Catalog::load(&paths)?)
    }

    fn assert_typed_catalog(catalog: &Catalog) {
        let films = &catalog.films;
        assert_eq!(films.id, vec![Some(27205), Some(600)]);
        assert_eq!(
            films.release_date,
            vec![NaiveDate::from_ymd_opt(2010, 7, 16), None]
        );
        assert_eq!(
            films.release_date_raw,
            vec![Some("2010-07-16".to_string()), None]
        );
        assert_eq!(films.vote_count, vec![Some(14075.0), Some(12.0)]);
        assert_eq!(films.vote_average[0], Some(8.3));
        assert_eq!(films.return_[1], None);
        assert_eq!(catalog.cast.movie_id, vec![Some(27205)]);
        assert_eq!(catalog.crew.job[0].as_deref(), Some("Director"));
    }

    #[test]
    fn test_load_parquet_date_column() -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_typed_catalog(&load_typed_parquet(DataType::Date)?);
        Ok(())
    }

    #[test]
    fn test_load_parquet_datetime_column() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let catalog = load_typed_parquet(DataType::Datetime(TimeUnit::Milliseconds, None))?;
        assert_typed_catalog(&catalog);
        assert!(crate::mes::cantidad_filmaciones_mes(&catalog, "julio").starts_with("1 "));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths::in_dir(dir.path(), "movies.csv", "cast.csv", "crew.csv");
        assert!(matches!(
            Catalog::load(&paths),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn test_load_unsupported_format() {
        let paths = DatasetPaths::in_dir("Datasets", "movies.json", "cast.csv", "crew.csv");
        assert!(matches!(
            Catalog::load(&paths),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }
}
