use crate::net::{BodyAccumulator, ProbeResponse};
use url::Url;

// Issues a GET for `url` and streams the body to the end.
//
// `on_status` is called exactly once, as soon as the response head is in and
// before any body byte is read. Non-2xx codes go through the same path as 2xx.
pub async fn fetch_streaming<F>(
    client: &reqwest::Client,
    url: Url,
    on_status: F,
) -> Result<ProbeResponse, reqwest::Error>
where
    F: FnOnce(u16),
{
    log::debug!("GET {url}");
    let mut res = client.get(url).send().await?;

    let status = res.status();
    log::debug!("response head received: {status}");
    on_status(status.as_u16());

    let final_url = res.url().clone();
    let headers = res.headers().clone();

    let mut body = BodyAccumulator::new();
    while let Some(chunk) = res.chunk().await? {
        log::trace!("chunk #{}: {} bytes", body.chunk_count() + 1, chunk.len());
        body.push(&chunk);
    }
    log::debug!("body complete: {} bytes in {} chunks", body.len(), body.chunk_count());

    Ok(ProbeResponse {
        url: final_url,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        headers,
        body,
    })
}
