#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::tempdir;

    use crate::cluster::{cluster_locations, Algorithm, ClusterError, ClusterMap};
    use crate::{encoding, io, AlgorithmArg, Args};

    const FIXTURE_CSV: &str = "id,name,lat,lon\n\
                               1,Alice,52.523955,13.442362\n\
                               2,Bob,52.526659,13.448097\n\
                               3,Carol,52.525626,13.419246\n\
                               4,Dan,52.52443559865125,13.41261723049818\n\
                               5,Erin,53.0,13.0\n";

    fn has_member(cluster: &[crate::cluster::CoordinatePoint], name: &str) -> bool {
        cluster
            .iter()
            .any(|p| p.attributes.iter().any(|(_, v)| v == name))
    }

    #[test]
    fn test_pipeline_writes_all_output_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, FIXTURE_CSV).unwrap();
        let out = dir.path().join("output");

        let points = io::read_csv_file(&input).unwrap();
        assert_eq!(points.len(), 5);

        let clusters = cluster_locations(points, Algorithm::Dbscan, 0.5, 2).unwrap();
        assert_eq!(clusters.len(), 2);
        assert!(has_member(&clusters[&0], "Alice"));
        assert!(has_member(&clusters[&0], "Bob"));
        assert!(has_member(&clusters[&1], "Carol"));
        assert!(has_member(&clusters[&1], "Dan"));

        let encoded = encoding::encode_clusters(&clusters).unwrap();
        io::write_output_file(&out, "result.txt", &encoded.text).unwrap();
        io::write_output_file(&out, "result.json", &encoded.json).unwrap();
        io::write_output_file(&out, "result.geojson", &encoded.geojson).unwrap();
        io::write_output_file(&out, "result.csv", &encoded.csv).unwrap();
        io::write_output_file(&out, "result.html", &encoding::render_map(&encoded.geojson))
            .unwrap();

        for name in [
            "result.txt",
            "result.json",
            "result.geojson",
            "result.csv",
            "result.html",
        ] {
            let content = fs::read_to_string(out.join(name)).unwrap();
            assert!(!content.is_empty(), "{} should not be empty", name);
        }

        let text = fs::read_to_string(out.join("result.txt")).unwrap();
        assert!(text.starts_with("Cluster 0\n"));
        assert!(!text.contains("Erin"));
    }

    #[test]
    fn test_optics_selector_runs_the_ordered_variant() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, FIXTURE_CSV).unwrap();

        let points = io::read_csv_file(&input).unwrap();
        let clusters = cluster_locations(points, Algorithm::Optics, 0.5, 2).unwrap();

        assert_eq!(clusters.len(), 2);
        assert!(has_member(&clusters[&0], "Alice"));
        assert!(has_member(&clusters[&1], "Dan"));
    }

    #[test]
    fn test_empty_input_yields_empty_map_not_error() {
        let clusters = cluster_locations(Vec::new(), Algorithm::Dbscan, 1.0, 3).unwrap();
        assert_eq!(clusters, ClusterMap::new());
    }

    #[test]
    fn test_negative_distance_fails_before_clustering() {
        let err = cluster_locations(Vec::new(), Algorithm::Dbscan, -1.0, 3).unwrap_err();
        assert_eq!(
            err,
            ClusterError::InvalidParameter {
                name: "distance",
                value: "-1".into(),
            }
        );
    }

    #[test]
    fn test_args_defaults() {
        let args =
            Args::try_parse_from(["geocluster", "-d", "0.5", "-s", "2", "points.csv"]).unwrap();
        assert_eq!(args.distance, 0.5);
        assert_eq!(args.size, 2);
        assert_eq!(args.output.to_str(), Some("output"));
        assert!(matches!(args.algorithm, AlgorithmArg::Dbscan));
        assert!(!args.debug);
    }

    #[test]
    fn test_args_algorithm_choice() {
        let args = Args::try_parse_from([
            "geocluster",
            "-d",
            "0.5",
            "-s",
            "2",
            "-a",
            "optics",
            "--debug",
            "points.csv",
        ])
        .unwrap();
        assert!(matches!(args.algorithm, AlgorithmArg::Optics));
        assert!(args.debug);
    }

    #[test]
    fn test_args_require_distance_and_size() {
        assert!(Args::try_parse_from(["geocluster", "points.csv"]).is_err());
        assert!(Args::try_parse_from(["geocluster", "-d", "0.5", "points.csv"]).is_err());
    }
}
