use crate::consts;
use crate::service::Recommendation;

pub fn assert_matched(recommendation: &Recommendation, expected: &str) {
    match recommendation {
        Recommendation::Matched(text) => assert_eq!(text, expected),
        other => panic!("Expected Matched({expected:?}), got {other:?}"),
    }
}

pub fn assert_fallback(recommendation: &Recommendation, expected: &str) {
    match recommendation {
        Recommendation::Fallback(text) => assert_eq!(text, expected),
        other => panic!("Expected Fallback({expected:?}), got {other:?}"),
    }
}

pub fn assert_fallback_error(recommendation: &Recommendation, detail: &str) {
    match recommendation {
        Recommendation::Fallback(text) => {
            assert!(
                text.starts_with(consts::FALLBACK_ERROR_PREFIX),
                "{text:?} should start with the error prefix"
            );
            assert!(text.contains(detail), "{text:?} should contain {detail:?}");
        }
        other => panic!("Expected Fallback error, got {other:?}"),
    }
}
