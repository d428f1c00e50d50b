//! Integration tests for importing CSV files into a cache.

use std::io::Write;
use std::path::{Path, PathBuf};

use flatcache_ingest::{
    DataSetCache, FieldType, ImportObserver, ImportOptions, Importer, IngestError, NoopObserver,
    SeedType, import,
};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[derive(Debug, PartialEq)]
enum Event {
    Started(PathBuf),
    Progress(u64),
    Completed(usize),
    Typed(String, FieldType),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl ImportObserver for Recorder {
    fn import_started(&mut self, path: &Path) {
        self.events.push(Event::Started(path.to_path_buf()));
    }

    fn rows_progress(&mut self, rows: u64) {
        self.events.push(Event::Progress(rows));
    }

    fn import_completed(&mut self, rows: usize) {
        self.events.push(Event::Completed(rows));
    }

    fn field_typed(&mut self, name: &str, field_type: FieldType) {
        self.events.push(Event::Typed(name.to_string(), field_type));
    }
}

#[test]
fn mixed_columns_infer_most_specific_type() {
    let file = create_temp_csv("id,price,name\n1,9.99,apple\n2,10,banana\n");
    let mut cache = DataSetCache::new();
    import(&mut cache, file.path()).unwrap();

    insta::assert_debug_snapshot!(cache.field_types(), @r"
    [
        Integer,
        Float,
        String,
    ]
    ");
    assert_eq!(cache.row_count(), 2);
}

#[test]
fn single_text_value_is_string() {
    let file = create_temp_csv("a\nabc\n");
    let mut cache = DataSetCache::new();
    import(&mut cache, file.path()).unwrap();

    assert_eq!(cache.field_types(), &[FieldType::String]);
}

#[test]
fn header_only_file_keeps_integer_seed() {
    let file = create_temp_csv("a\n");
    let mut cache = DataSetCache::new();
    let summary = import(&mut cache, file.path()).unwrap();

    assert_eq!(cache.field_names(), &["a"]);
    assert_eq!(cache.field_types(), &[FieldType::Integer]);
    assert_eq!(summary.row_count, 0);
}

#[test]
fn header_only_file_with_unknown_seed() {
    let file = create_temp_csv("a,b\n");
    let mut cache = DataSetCache::new();
    Importer::new(ImportOptions::default().with_seed(SeedType::Unknown))
        .with_observer(NoopObserver)
        .import(&mut cache, file.path())
        .unwrap();

    assert_eq!(cache.field_types(), &[FieldType::Unknown, FieldType::Unknown]);
}

#[test]
fn unknown_seed_matches_integer_seed_once_rows_exist() {
    let content = "a,b,c,d\n1,1.5,x,\n2,3,4,5\n";
    let file = create_temp_csv(content);

    let mut seeded_integer = DataSetCache::new();
    import(&mut seeded_integer, file.path()).unwrap();

    let mut seeded_unknown = DataSetCache::new();
    Importer::new(ImportOptions::default().with_seed(SeedType::Unknown))
        .import(&mut seeded_unknown, file.path())
        .unwrap();

    assert_eq!(seeded_integer.field_types(), seeded_unknown.field_types());
}

#[test]
fn malformed_row_keeps_preceding_rows() {
    let file = create_temp_csv("id,name\n1,a\n2,b\n\"3,c\n4,d\n");
    let mut cache = DataSetCache::new();
    let result = import(&mut cache, file.path());

    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    assert_eq!(cache.row_count(), 2);
    assert_eq!(cache.row(0).unwrap(), &["1", "a"]);
    assert_eq!(cache.row(1).unwrap(), &["2", "b"]);
}

fn assert_quote_error_after_two_rows(content: &str, expected_line: u64) {
    let file = create_temp_csv(content);
    let mut cache = DataSetCache::new();
    let err = import(&mut cache, file.path()).unwrap_err();

    match err {
        IngestError::CsvParse { line, .. } => assert_eq!(line, Some(expected_line)),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(cache.row_count(), 2);
}

#[test]
fn unterminated_quote_in_last_field_is_a_parse_error() {
    assert_quote_error_after_two_rows("a,b\n1,2\n3,4\n5,\"6\n", 4);
}

#[test]
fn unterminated_quote_in_single_column_is_a_parse_error() {
    assert_quote_error_after_two_rows("a\n1\n2\n\"3\n", 4);
}

#[test]
fn bare_quote_in_unquoted_field_is_a_parse_error() {
    assert_quote_error_after_two_rows("a,b\n1,2\n3,4\n5,x\"y\n", 4);
}

#[test]
fn text_after_closing_quote_is_a_parse_error() {
    assert_quote_error_after_two_rows("a,b\n1,2\n3,4\n\"5\"x,6\n", 4);
}

#[test]
fn quoted_field_may_span_lines() {
    let file = create_temp_csv("a,b\n1,\"two\nlines\"\n3,4\n");
    let mut cache = DataSetCache::new();
    let summary = import(&mut cache, file.path()).unwrap();

    assert_eq!(summary.row_count, 2);
    assert_eq!(cache.row(0).unwrap(), &["1", "two\nlines"]);
}

#[test]
fn ragged_row_is_a_parse_error() {
    let file = create_temp_csv("a,b\n1,2\n3\n");
    let mut cache = DataSetCache::new();
    let err = import(&mut cache, file.path()).unwrap_err();

    match err {
        IngestError::CsvParse { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(line, Some(3));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(cache.row_count(), 1);
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"a,b\n1,2\n3,\xff\xfe\n").unwrap();
    let mut cache = DataSetCache::new();
    let result = import(&mut cache, file.path());

    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    assert_eq!(cache.row_count(), 1);
}

#[test]
fn missing_file_is_an_open_error() {
    let mut cache = DataSetCache::new();
    let err = import(&mut cache, "/no/such/dir/data.csv").unwrap_err();

    assert!(matches!(err, IngestError::Open { .. }));
    assert!(err.to_string().contains("/no/such/dir/data.csv"));
    assert!(cache.field_names().is_empty());
    assert!(cache.field_types().is_empty());
    assert_eq!(cache.row_count(), 0);
}

#[test]
fn empty_file_is_unexpected_eof() {
    let file = create_temp_csv("");
    let mut cache = DataSetCache::new();
    let result = import(&mut cache, file.path());

    assert!(matches!(result, Err(IngestError::UnexpectedEof { .. })));
    assert!(cache.is_empty());
}

#[test]
fn float_column_stays_float_on_integers() {
    let file = create_temp_csv("v\n1.5\n2\n3\n");
    let mut cache = DataSetCache::new();
    import(&mut cache, file.path()).unwrap();

    assert_eq!(cache.field_types(), &[FieldType::Float]);
}

#[test]
fn string_column_never_narrows() {
    let file = create_temp_csv("v\n1\nx\n2\n3.5\n");
    let mut cache = DataSetCache::new();
    import(&mut cache, file.path()).unwrap();

    assert_eq!(cache.field_types(), &[FieldType::String]);
}

#[test]
fn row_count_excludes_header() {
    let mut content = String::from("n,sq\n");
    for i in 0..2500 {
        content.push_str(&format!("{i},{}\n", i * i));
    }
    let file = create_temp_csv(&content);
    let mut cache = DataSetCache::new();
    let summary = import(&mut cache, file.path()).unwrap();

    assert_eq!(summary.row_count, 2500);
    assert_eq!(cache.row_count(), 2500);
    assert!(cache.rows().iter().all(|row| row.len() == 2));
}

#[test]
fn quoted_cells_are_unescaped() {
    let file = create_temp_csv("name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\n");
    let mut cache = DataSetCache::new();
    import(&mut cache, file.path()).unwrap();

    assert_eq!(cache.row(0).unwrap(), &["Smith, J", "said \"hi\""]);
}

#[test]
fn observer_sees_events_in_order() {
    let file = create_temp_csv("id,price\n1,9.99\n2,10\n3,4\n");
    let mut recorder = Recorder::default();
    let mut cache = DataSetCache::new();
    Importer::new(ImportOptions::default().with_progress_interval(2))
        .with_observer(&mut recorder)
        .import(&mut cache, file.path())
        .unwrap();

    assert_eq!(
        recorder.events,
        vec![
            Event::Started(file.path().to_path_buf()),
            Event::Progress(2),
            Event::Completed(3),
            Event::Typed("id".to_string(), FieldType::Integer),
            Event::Typed("price".to_string(), FieldType::Float),
        ]
    );
}

#[test]
fn observer_sees_no_completion_on_failure() {
    let file = create_temp_csv("a,b\n1,2\n3\n");
    let mut cache = DataSetCache::new();
    let mut importer = Importer::new(ImportOptions::default()).with_observer(Recorder::default());
    assert!(importer.import(&mut cache, file.path()).is_err());

    let recorder = importer.into_observer();
    assert_eq!(
        recorder.events,
        vec![Event::Started(file.path().to_path_buf())]
    );
}

#[test]
fn summary_lists_fields_in_header_order() {
    let file = create_temp_csv("z,y,x\n1,a,2.5\n");
    let mut cache = DataSetCache::new();
    let summary = import(&mut cache, file.path()).unwrap();

    let names: Vec<&str> = summary.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["z", "y", "x"]);
    assert_eq!(summary.source, file.path());
    assert_eq!(summary, cache.summary(file.path()));
}
