#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use crate::io::{read_csv_file, write_output_file};

    fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_valid_rows_with_attributes() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "points.csv",
            "id,name,lat,lon\n1,Alice,52.523955,13.442362\n2,Bob,52.526659,13.448097\n",
        );

        let points = read_csv_file(&path).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].index, 0);
        assert_eq!(points[0].latitude, 52.523955);
        assert_eq!(points[0].longitude, 13.442362);
        assert_eq!(
            points[0].attributes,
            vec![
                ("id".to_string(), "1".to_string()),
                ("name".to_string(), "Alice".to_string()),
            ]
        );
        assert_eq!(points[1].index, 1);
        assert_eq!(points[1].attributes[1].1, "Bob");
    }

    #[test]
    fn test_invalid_rows_are_dropped() {
        let dir = tempdir().unwrap();
        // Rows 3 and 7 are valid: the others have a missing, non-numeric,
        // or out-of-range coordinate.
        let path = write_fixture(
            dir.path(),
            "points.csv",
            "name,lat,lon\n\
             Missing,,13.0\n\
             ,52.0,13.0\n\
             BadLat,91.0,13.0\n\
             BadLon,52.0,181.0\n\
             NotANumber,fifty-two,13.0\n\
             Bob,52.1,13.1\n",
        );

        let points = read_csv_file(&path).unwrap();

        assert_eq!(points.len(), 2);
        // Indexes count valid rows only.
        assert_eq!(points[0].index, 0);
        assert_eq!(points[0].attributes[0].1, "");
        assert_eq!(points[1].index, 1);
        assert_eq!(points[1].attributes[0].1, "Bob");
    }

    #[test]
    fn test_coordinate_range_is_inclusive() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "points.csv",
            "lat,lon\n90,180\n-90,-180\n",
        );

        let points = read_csv_file(&path).unwrap();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.attributes.is_empty()));
    }

    #[test]
    fn test_short_rows_are_padded_to_the_header_columns() {
        let dir = tempdir().unwrap();
        // Second row is missing the trailing 'note' field entirely.
        let path = write_fixture(
            dir.path(),
            "points.csv",
            "lat,lon,note\n0.0,0.0,first\n0.001,0.0\n",
        );

        let points = read_csv_file(&path).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(
            points[0].attributes,
            vec![("note".to_string(), "first".to_string())]
        );
        assert_eq!(
            points[1].attributes,
            vec![("note".to_string(), String::new())]
        );

        // Padded rows keep the encoded output rectangular.
        let mut map = crate::cluster::ClusterMap::new();
        map.insert(0, points);
        let encoded = crate::encoding::encode_clusters(&map).unwrap();
        assert_eq!(
            encoded.csv,
            "\"cluster_id\",\"note\",\"lat\",\"lon\"\n\
             0,\"first\",0,0\n\
             0,\"\",0.001,0\n"
        );
    }

    #[test]
    fn test_missing_coordinate_columns_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "points.csv",
            "latitude,longitude\n52.0,13.0\n",
        );

        let err = read_csv_file(&path).unwrap_err();
        assert!(err.to_string().contains("'lat' and 'lon'"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_csv_file(Path::new("does/not/exist.csv")).is_err());
    }

    #[test]
    fn test_write_output_file_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("this/dir/does/not/exist");

        let path = write_output_file(&nested, "test.txt", "test").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "test");
    }
}
