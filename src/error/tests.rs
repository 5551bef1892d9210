//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod tml_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let tml_error = TmlError::from(reqwest_error);

        match tml_error {
            TmlError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tml_error = TmlError::from(io_error);

        match tml_error {
            TmlError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_csv_error_conversion() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_error = reader.records().find_map(|r| r.err()).unwrap();
        let tml_error = TmlError::from(csv_error);

        match tml_error {
            TmlError::Csv(_) => (),
            _ => panic!("Expected Csv error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let tml_error = TmlError::from(json_error);

        assert!(tml_error.to_string().starts_with("JSON serialization failed"));
        match tml_error {
            TmlError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "nineteen".parse::<u16>().unwrap_err();
        let tml_error = TmlError::from(parse_error);

        match tml_error {
            TmlError::InvalidYear(_) => (),
            _ => panic!("Expected InvalidYear error variant"),
        }
    }

    #[test]
    fn test_invalid_year_range_error() {
        let error = TmlError::InvalidYearRange {
            start: 2025,
            end: 1968,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("2025"));
        assert!(error_string.contains("1968"));
    }

    #[test]
    fn test_unknown_encoding_error() {
        let error = TmlError::UnknownEncoding {
            name: "ebcdic".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown encoding: ebcdic");
    }

    #[test]
    fn test_decode_error_names_path_and_candidates() {
        let error = TmlError::Decode {
            path: PathBuf::from("Data/1990.csv"),
            tried: "utf-8".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Data/1990.csv"));
        assert!(error_string.contains("utf-8"));
    }

    #[test]
    fn test_file_error_keeps_source() {
        let error = TmlError::file(
            "Data/1968.csv",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );

        assert!(error.to_string().starts_with("Data/1968.csv"));
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tml_error = TmlError::from(io_error);

        let error_trait: &dyn std::error::Error = &tml_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = TmlError::NoEncodings;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "NoEncodings");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(TmlError::NoEncodings)
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            TmlError::NoEncodings => (),
            _ => panic!("Expected NoEncodings error"),
        }
    }
}
