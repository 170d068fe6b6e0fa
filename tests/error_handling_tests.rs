use unsuspend::{UnsuspendError, UnsuspendResult};

/// Error handling and resilience tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let errors = vec![
            UnsuspendError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            )),
            UnsuspendError::MissingUrl,
            UnsuspendError::MissingPayloadKey {
                key: "ttl",
                payload: "uri=http%3A%2F%2Fx.test".to_string(),
            },
            UnsuspendError::Output("Output error".to_string()),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");

            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<UnsuspendError>();
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: UnsuspendError = io_error.into();
        assert!(matches!(error, UnsuspendError::Io(_)));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: UnsuspendError = json_error.into();
        assert!(matches!(error, UnsuspendError::Document(_)));
    }

    #[test]
    fn test_missing_payload_key_names_the_key() {
        let error = UnsuspendError::MissingPayloadKey {
            key: "uri",
            payload: "ttl=Only+Title".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("uri"));
        assert!(display.contains("ttl=Only+Title"));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> UnsuspendResult<()> {
            Err(UnsuspendError::MissingUrl)
        }
        assert!(fails().is_err());
    }
}
