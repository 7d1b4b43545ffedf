//! Saving remote logos, letters and photos under a predictable name

use anyhow::{Context, Result};

use crate::dom;

pub fn logo_file_name(gremio_id: i64) -> String {
    format!("logo_gremio_{gremio_id}.jpg")
}

pub fn letter_file_name(gremio_id: i64) -> String {
    format!("carta_gremio_{gremio_id}.pdf")
}

/// Members without an id are named by their position in the list.
pub fn member_photo_file_name(member_id: Option<i64>, index: usize) -> String {
    match member_id {
        Some(id) => format!("integrante_{id}.jpg"),
        None => format!("integrante_{index}.jpg"),
    }
}

/// Fetch `url` and hand it to the browser as `file_name`.
///
/// If the asset cannot be fetched (typically a CORS rejection) it is opened in
/// a new tab instead.
pub async fn download(url: &str, file_name: &str) {
    match fetch_and_save(url, file_name).await {
        Ok(()) => tracing::info!(file_name, "Download started"),
        Err(e) => {
            tracing::warn!(url, error = %e, "Download failed, opening in new tab");
            dom::open_in_new_tab(url);
        }
    }
}

async fn fetch_and_save(url: &str, file_name: &str) -> Result<()> {
    let (bytes, content_type) = fetch_bytes(url).await?;
    save_bytes(&bytes, file_name, &content_type)
}

/// Body and content type of a remote asset.
pub async fn fetch_bytes(url: &str) -> Result<(Vec<u8>, String)> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()
        .context("Asset request was rejected")?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let bytes = response
        .bytes()
        .await
        .context("Failed to read asset body")?;

    Ok((bytes.to_vec(), content_type))
}

#[cfg(feature = "web")]
fn save_bytes(bytes: &[u8], file_name: &str, content_type: &str) -> Result<()> {
    use anyhow::anyhow;
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| anyhow!("{e:?}");

    let window = web_sys::window().context("No window")?;
    let document = window.document().context("No document")?;
    let body = document.body().context("No body")?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let href = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("Created element is not an anchor"))?;
    anchor.set_href(&href);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&href).map_err(js_err)?;

    Ok(())
}

#[cfg(not(feature = "web"))]
fn save_bytes(bytes: &[u8], file_name: &str, _content_type: &str) -> Result<()> {
    anyhow::bail!("Cannot save {file_name} ({} bytes) without a browser", bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(logo_file_name(12), "logo_gremio_12.jpg");
        assert_eq!(letter_file_name(12), "carta_gremio_12.pdf");
        assert_eq!(member_photo_file_name(Some(40), 0), "integrante_40.jpg");
        assert_eq!(member_photo_file_name(None, 3), "integrante_3.jpg");
    }
}
