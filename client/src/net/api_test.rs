use super::*;

#[test]
fn upload_url_joins_relative_path() {
    assert_eq!(upload_url("abc.jpg"), "/api/static/uploads/abc.jpg");
}

#[test]
fn upload_url_strips_leading_slash() {
    assert_eq!(upload_url("/2025/abc.jpg"), "/api/static/uploads/2025/abc.jpg");
}

#[test]
fn cri_data_endpoint_plain_district() {
    assert_eq!(cri_data_endpoint("Khordha"), "/api/get_cri_data/Khordha");
}

#[test]
fn cri_data_endpoint_encodes_spaces_and_slashes() {
    assert_eq!(cri_data_endpoint("Mumbai City"), "/api/get_cri_data/Mumbai%20City");
    assert_eq!(cri_data_endpoint("A/B"), "/api/get_cri_data/A%2FB");
}

#[test]
fn encode_path_segment_keeps_unreserved_characters() {
    assert_eq!(encode_path_segment("Janjgir-Champa_1.~"), "Janjgir-Champa_1.~");
}

#[test]
fn encode_path_segment_encodes_utf8_bytes() {
    assert_eq!(encode_path_segment("é"), "%C3%A9");
}

#[test]
fn request_failed_message_formats_endpoint_and_status() {
    assert_eq!(request_failed_message("/api/analytics", 401), "/api/analytics failed: 401");
}

#[cfg(not(feature = "hydrate"))]
mod server_side {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn current_user_is_none_outside_browser() {
        assert!(block_on(fetch_current_user()).is_none());
    }

    #[test]
    fn mutations_report_unavailable_outside_browser() {
        assert_eq!(block_on(login("a@b.c", "pw")), Err("not available on server".to_owned()));
        assert!(block_on(update_status(1, IssueStatus::Resolved)).is_err());
        assert!(block_on(logout()).is_err());
    }
}
