use const_format::concatcp;
use regex::Regex;
use rusqlite::Connection as Database;
use rusqlite::Error as DatabaseError;

/// Meta data describing the container stored in a SQLite database.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub struct MetaData(u32);

/// The availability of a container in a SQLite database.
#[derive(Debug, PartialEq)]
pub enum Availability {
    /// There is a container available.
    Available(MetaData),
    /// There is no container available.
    Missing,
    /// During querying, there was an SQLite error.
    Error(DatabaseError),
}

impl MetaData {
    /// Queries a database for the most recent meta data available.
    pub fn from_database(database: &Database) -> Availability {
        let mut statement = match database
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name LIKE ?")
        {
            Ok(statement) => statement,
            Err(err) => return Availability::Error(err),
        };

        let mut tables =
            match statement.query(&[concatcp!(MetaDataExtractor::META_TABLE_PREFIX, "%")]) {
                Ok(tables) => tables,
                Err(err) => return Availability::Error(err),
            };

        let version_extractor = MetaDataExtractor::default();
        let mut last_version: Option<MetaData> = None;
        loop {
            let row = match tables.next() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(err) => return Availability::Error(err),
            };
            let name: String = match row.get(0) {
                Ok(name) => name,
                Err(err) => return Availability::Error(err),
            };
            if let Some(version) = version_extractor.extract(name) {
                last_version = last_version.max(Some(MetaData(version)));
            }
        }

        match last_version {
            Some(meta_data) => Availability::Available(meta_data),
            None => Availability::Missing,
        }
    }

    /// Returns the version of the container.
    pub fn version(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
/// An internal extractor for the container version.
struct MetaDataExtractor(Regex);

impl Default for MetaDataExtractor {
    fn default() -> Self {
        MetaDataExtractor(
            Regex::new(concatcp!("^", MetaDataExtractor::META_TABLE_PREFIX, "([0-9]+)$"))
                .expect("Encounter invalid container RegEx"),
        )
    }
}

impl MetaDataExtractor {
    const META_TABLE_PREFIX: &'static str = "NcFile_Meta_";

    #[cfg(test)]
    pub fn generate_table_name(version: u32) -> String {
        format!("{}{}", MetaDataExtractor::META_TABLE_PREFIX, version)
    }

    pub fn extract<T: AsRef<str>>(&self, value: T) -> Option<u32> {
        self.0.captures(value.as_ref()).and_then(|value| {
            value
                .get(1)
                .and_then(|value| str::parse(value.as_str()).ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Availability, Database, MetaData, MetaDataExtractor};

    #[test]
    fn test_extractor() {
        let version_extractor = MetaDataExtractor::default();
        assert_eq!(&MetaDataExtractor::generate_table_name(0), "NcFile_Meta_0");
        assert_eq!(
            version_extractor.extract(MetaDataExtractor::generate_table_name(0)),
            Some(0)
        );
        assert_eq!(
            version_extractor.extract(MetaDataExtractor::generate_table_name(42)),
            Some(42)
        );
        assert_eq!(version_extractor.extract("NcFile_Meta_"), None);
        assert_eq!(version_extractor.extract("NcFile_Meta_1_backup"), None);
    }

    #[test]
    fn test_missing_container() {
        let database = Database::open_in_memory().expect("Valid SQLite database");
        assert_eq!(MetaData::from_database(&database), Availability::Missing);
    }

    #[test]
    fn test_existing_container() {
        let database = Database::open_in_memory().expect("Valid SQLite database");
        database
            .execute(
                &format!(
                    "CREATE TABLE {} (example TEXT)",
                    MetaDataExtractor::generate_table_name(0)
                ),
                [],
            )
            .expect("Create table failed");
        assert_eq!(
            MetaData::from_database(&database),
            Availability::Available(MetaData(0))
        );

        // The most recent meta data is discovered.
        database
            .execute(
                &format!(
                    "CREATE TABLE {} (example TEXT)",
                    MetaDataExtractor::generate_table_name(42)
                ),
                [],
            )
            .expect("Create table failed");
        assert_eq!(
            MetaData::from_database(&database),
            Availability::Available(MetaData(42))
        );
    }
}
