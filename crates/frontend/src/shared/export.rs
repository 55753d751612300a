//! Browser download of the CSV built by `contracts::shared::export`

use contracts::shared::export::{build_csv, CsvExportable};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Builds the CSV for `data` and hands it to the browser as `filename`
pub fn download_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv_content = build_csv(data).map_err(|e| e.to_string())?;
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a temporary anchor pointing at an object URL for `blob`. The URL
/// is revoked whatever happens after it was created.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let clicked = click_anchor(&document, &url, filename);
    let revoked =
        Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e));
    first_error(clicked, revoked)
}

fn click_anchor(document: &Document, url: &str, filename: &str) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;
    Ok(())
}

/// Outcome of a step followed by its cleanup: the step's error wins
fn first_error(step: Result<(), String>, cleanup: Result<(), String>) -> Result<(), String> {
    step.and(cleanup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_prefers_download_failure() {
        let step = Err("Failed to append anchor".to_string());
        let cleanup = Err("Failed to revoke URL".to_string());
        assert_eq!(first_error(step, cleanup), Err("Failed to append anchor".to_string()));
    }

    #[test]
    fn test_first_error_reports_cleanup_failure() {
        assert_eq!(
            first_error(Ok(()), Err("Failed to revoke URL".to_string())),
            Err("Failed to revoke URL".to_string())
        );
        assert_eq!(first_error(Ok(()), Ok(())), Ok(()));
    }
}
