//! Blocking HTTP GET behind a small trait so the fetcher can be exercised without a network.

/// Status and fully buffered body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues exactly one GET per call.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, curl::Error>;
}

/// libcurl transport. Uses curl's defaults for timeouts; redirects are followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;

        let mut list = curl::easy::List::new();
        for (name, value) in headers {
            list.append(&header_line(name, value))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(RawResponse { status, body })
    }
}

/// curl drops `"Name: "` with a blank value; `"Name;"` sends the header with an empty value.
fn header_line(name: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{};", name)
    } else {
        format!("{}: {}", name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_forms() {
        assert_eq!(header_line("PRIVATE-TOKEN", "abc"), "PRIVATE-TOKEN: abc");
        assert_eq!(header_line("PRIVATE-TOKEN", ""), "PRIVATE-TOKEN;");
        assert_eq!(header_line("PRIVATE-TOKEN", "  "), "PRIVATE-TOKEN;");
    }

    #[test]
    fn success_range() {
        let ok = |status| RawResponse { status, body: Vec::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(ok(299));
        assert!(!ok(199));
        assert!(!ok(301));
        assert!(!ok(404));
        assert!(!ok(500));
    }
}
