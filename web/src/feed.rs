use chabon_core::Grid;
use chabon_protocol::{DailyPuzzle, FeedError, PuzzleDate};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("Could not reach the puzzle feed: {0}")]
    Request(String),
    #[error("Puzzle feed answered with status {0}")]
    Status(u16),
    #[error("Puzzle feed sent no text")]
    NotText,
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl From<JsValue> for FetchError {
    fn from(err: JsValue) -> Self {
        Self::Request(format!("{:?}", err))
    }
}

/// Today's date in the browser's timezone.
pub(crate) fn local_date() -> Option<PuzzleDate> {
    let now = js_sys::Date::new_0();
    PuzzleDate::from_ymd(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// Fetches the puzzle of `date` once and lays it out as a board.
pub(crate) async fn load_daily_grid(date: PuzzleDate) -> Result<Grid, FetchError> {
    let url = date.feed_url();
    log::debug!("fetching {}", url);

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(&url, &init)?;

    let response: Response = JsFuture::from(gloo::utils::window().fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or(FetchError::NotText)?;
    Ok(DailyPuzzle::from_json(&body)?.to_grid()?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_date_is_a_real_day() {
        let date = local_date().unwrap();

        assert_eq!(date.to_string().len(), 10);
        assert!(date.feed_url().ends_with(&format!("{}.json", date)));
    }
}
