use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::models::PluginConfig;
use crate::global_constants::{self, LOG_TAG_IMGBB};

#[derive(Debug, Deserialize)]
struct ImgbbUploadResponse {
    success: bool,
    #[serde(default)]
    data: Option<ImgbbImageData>,
    #[serde(default)]
    error: Option<ImgbbError>,
}

#[derive(Debug, Deserialize)]
struct ImgbbImageData {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImgbbError {
    message: Option<String>,
}

pub struct ImgbbImageHostingService {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: Option<String>,
    expiration_seconds: Option<u64>,
}

impl ImgbbImageHostingService {
    pub fn new(api_url: String, api_key: Option<String>, expiration_seconds: Option<u64>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url,
            api_key,
            expiration_seconds,
        }
    }

    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(
            config.imgbb_api_url.clone(),
            config.api_key().map(str::to_string),
            config.imgbb_expiration_seconds,
        )
    }

    fn build_form_fields(&self, api_key: &str, base64_image: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("key", api_key.to_string()),
            ("image", base64_image.to_string()),
        ];

        if let Some(expiration) = self.expiration_seconds {
            fields.push(("expiration", expiration.to_string()));
        }

        fields
    }

    fn interpret_response(status: StatusCode, response_text: &str) -> Result<String> {
        if status != StatusCode::OK {
            anyhow::bail!("imgbb request failed with status {}", status.as_u16());
        }

        let response: ImgbbUploadResponse = serde_json::from_str(response_text)
            .context("imgbb response is not valid JSON")?;

        if !response.success {
            let message = response
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| global_constants::IMGBB_UNKNOWN_ERROR.to_string());
            anyhow::bail!("imgbb rejected the upload: {}", message);
        }

        response
            .data
            .and_then(|data| data.url)
            .ok_or_else(|| anyhow::anyhow!("Failed to extract image URL from imgbb response"))
    }
}

impl ImageHostingService for ImgbbImageHostingService {
    fn upload_image(&self, base64_image: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("imgbb api key is not configured"))?;

        log::info!(
            "{} Uploading image to imgbb ({} base64 chars)",
            LOG_TAG_IMGBB,
            base64_image.len()
        );

        let response = self
            .client
            .post(&self.api_url)
            .form(&self.build_form_fields(api_key, base64_image))
            .send()
            .context("imgbb request could not be sent")?;

        let status = response.status();
        let response_text = response
            .text()
            .context("imgbb response body could not be read")?;
        log::debug!("{} imgbb response ({}): {}", LOG_TAG_IMGBB, status, response_text);

        let image_url = Self::interpret_response(status, &response_text)?;

        log::info!("{} Image uploaded successfully: {}", LOG_TAG_IMGBB, image_url);
        Ok(image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    struct CapturedRequest {
        headers: Vec<String>,
        body: String,
    }

    fn json_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// Accepts one connection, records the request and writes `raw_response` verbatim.
    fn serve_once(raw_response: String) -> (String, mpsc::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut headers = Vec::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                let lowercase = line.trim_end().to_ascii_lowercase();
                if let Some(value) = lowercase.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                headers.push(lowercase);
            }

            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).unwrap();
            sender
                .send(CapturedRequest {
                    headers,
                    body: String::from_utf8(request_body).unwrap(),
                })
                .unwrap();

            let mut stream = stream;
            stream.write_all(raw_response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        (format!("http://{}/1/upload", address), receiver)
    }

    fn local_service(url: String, expiration_seconds: Option<u64>) -> ImgbbImageHostingService {
        let mut service =
            ImgbbImageHostingService::new(url, Some("secret".to_string()), expiration_seconds);
        service.client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        service
    }

    #[test]
    fn test_interpret_response_returns_url_on_success() {
        let body = r#"{"success": true, "data": {"url": "https://i.ibb.co/abc123/x.png"}}"#;

        let result = ImgbbImageHostingService::interpret_response(StatusCode::OK, body);

        assert_eq!(result.unwrap(), "https://i.ibb.co/abc123/x.png");
    }

    #[test]
    fn test_interpret_response_fails_on_non_200_status() {
        let result =
            ImgbbImageHostingService::interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "");

        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[test]
    fn test_interpret_response_fails_when_success_flag_is_false() {
        let body = r#"{"success": false, "error": {"message": "Invalid API v1 key."}}"#;

        let result = ImgbbImageHostingService::interpret_response(StatusCode::OK, body);

        assert!(result.unwrap_err().to_string().contains("Invalid API v1 key."));
    }

    #[test]
    fn test_interpret_response_uses_unknown_error_without_message() {
        let body = r#"{"success": false}"#;

        let result = ImgbbImageHostingService::interpret_response(StatusCode::OK, body);

        assert!(result
            .unwrap_err()
            .to_string()
            .contains(global_constants::IMGBB_UNKNOWN_ERROR));
    }

    #[test]
    fn test_interpret_response_fails_without_url() {
        let body = r#"{"success": true, "data": {}}"#;

        assert!(ImgbbImageHostingService::interpret_response(StatusCode::OK, body).is_err());
    }

    #[test]
    fn test_interpret_response_fails_on_invalid_json() {
        assert!(ImgbbImageHostingService::interpret_response(StatusCode::OK, "<html>").is_err());
    }

    #[test]
    fn test_build_form_fields_adds_expiration_only_when_configured() {
        let without_expiration =
            ImgbbImageHostingService::new("http://unused".to_string(), None, None);
        let with_expiration =
            ImgbbImageHostingService::new("http://unused".to_string(), None, Some(900));

        assert_eq!(
            without_expiration.build_form_fields("k", "img"),
            vec![("key", "k".to_string()), ("image", "img".to_string())]
        );
        assert_eq!(
            with_expiration.build_form_fields("k", "img").last(),
            Some(&("expiration", "900".to_string()))
        );
    }

    #[test]
    fn test_upload_image_without_api_key_fails_before_request() {
        let service =
            ImgbbImageHostingService::new("http://127.0.0.1:9/upload".to_string(), None, None);

        let result = service.upload_image("aGVsbG8=");

        assert!(result.unwrap_err().to_string().contains("api key"));
    }

    #[test]
    fn test_upload_image_posts_url_encoded_form_and_returns_url() {
        let (url, captured) = serve_once(json_response(
            "200 OK",
            r#"{"success": true, "data": {"url": "https://i.ibb.co/abc123/x.png"}}"#,
        ));
        let service = local_service(url, None);

        let result = service.upload_image("aGVsbG8=");

        assert_eq!(result.unwrap(), "https://i.ibb.co/abc123/x.png");
        let request = captured.recv().unwrap();
        assert_eq!(request.body, "key=secret&image=aGVsbG8%3D");
        assert!(request
            .headers
            .iter()
            .any(|header| header == "content-type: application/x-www-form-urlencoded"));
    }

    #[test]
    fn test_upload_image_encodes_base64_symbols_and_expiration() {
        let (url, captured) = serve_once(json_response(
            "200 OK",
            r#"{"success": true, "data": {"url": "https://i.ibb.co/abc123/x.png"}}"#,
        ));
        let service = local_service(url, Some(600));

        service.upload_image("ab+/cd==").unwrap();

        assert_eq!(
            captured.recv().unwrap().body,
            "key=secret&image=ab%2B%2Fcd%3D%3D&expiration=600"
        );
    }

    #[test]
    fn test_upload_image_fails_on_server_error() {
        let (url, _captured) = serve_once(json_response("500 Internal Server Error", "{}"));
        let service = local_service(url, None);

        let result = service.upload_image("aGVsbG8=");

        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[test]
    fn test_upload_image_reports_truncated_body_as_read_failure() {
        let truncated = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"success\"".to_string();
        let (url, _captured) = serve_once(truncated);
        let service = local_service(url, None);

        let result = service.upload_image("aGVsbG8=");

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("imgbb response body could not be read"));
    }
}
