//! HTTP client for the room-data API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;
use vyas_core::{Endpoints, FloorId, ReportDraft, RoomId};

use crate::error::{Error, Result};
use crate::protocol::{
    AssetsResponse, FloorsResponse, RoomResponse, RoomsResponse, SubmitResponse,
};

/// Header marking a submission as an asynchronous (JSON-answered) request
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// The server collaborator as seen by the page
#[async_trait]
pub trait FacilityApi: Send + Sync {
    /// Rooms on a floor, with their current maintenance status
    async fn rooms_on_floor(&self, floor_id: FloorId) -> Result<RoomsResponse>;

    /// Equipment installed in a room
    async fn assets_in_room(&self, room_id: RoomId) -> Result<AssetsResponse>;

    /// Post a report as one multipart request to the form action
    async fn submit_report(&self, action: &str, draft: &ReportDraft) -> Result<SubmitResponse>;

    /// Floors of a building, ordered by level
    async fn floors_in_building(&self, building_id: i64) -> Result<FloorsResponse>;

    /// Look a room up by its display code
    async fn room_by_number(&self, number: &str) -> Result<RoomResponse>;
}

/// `FacilityApi` over HTTP
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(endpoints: &Endpoints) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = endpoints.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base: Url::parse(&endpoints.base_url)?,
            endpoints: endpoints.clone(),
        })
    }

    /// Fill `{key}` in a path template and resolve it against the base URL.
    /// `value` is percent-encoded as a single path segment.
    fn endpoint_url(&self, template: &str, key: &str, value: &str) -> Result<Url> {
        let placeholder = format!("{{{}}}", key);
        let mut endpoint = self.base.clone();
        {
            let mut segments = endpoint
                .path_segments_mut()
                .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments.clear();
            for segment in template.split('/').filter(|s| !s.is_empty()) {
                segments.push(&segment.replace(&placeholder, value));
            }
        }
        Ok(endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await?;
        read_envelope(response).await
    }
}

#[async_trait]
impl FacilityApi for HttpClient {
    async fn rooms_on_floor(&self, floor_id: FloorId) -> Result<RoomsResponse> {
        let url = self.endpoint_url(
            &self.endpoints.rooms_by_floor,
            "floor_id",
            &floor_id.to_string(),
        )?;
        self.get_json(url).await
    }

    async fn assets_in_room(&self, room_id: RoomId) -> Result<AssetsResponse> {
        let url = self.endpoint_url(
            &self.endpoints.assets_by_room,
            "room_id",
            &room_id.to_string(),
        )?;
        self.get_json(url).await
    }

    async fn submit_report(&self, action: &str, draft: &ReportDraft) -> Result<SubmitResponse> {
        let url = self.base.join(action)?;
        let form = build_form(draft).await?;

        info!(url = %url, room_id = ?draft.room_id, "Submitting report");
        let response = self
            .http
            .post(url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .multipart(form)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn floors_in_building(&self, building_id: i64) -> Result<FloorsResponse> {
        let url = self.endpoint_url(
            &self.endpoints.floors_by_building,
            "building_id",
            &building_id.to_string(),
        )?;
        self.get_json(url).await
    }

    async fn room_by_number(&self, number: &str) -> Result<RoomResponse> {
        let url = self.endpoint_url(&self.endpoints.room_by_number, "number", number)?;
        self.get_json(url).await
    }
}

/// Decode a JSON envelope. Error statuses still carry JSON (400 with an
/// `errors` list), so the body wins over the status when it parses.
async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;

    match serde_json::from_slice::<T>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if status.is_success() => Err(Error::Json(e)),
        Err(_) => Err(Error::Status(status.as_u16())),
    }
}

/// Multipart body of a report. The image is read from disk only now.
async fn build_form(draft: &ReportDraft) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in draft.form_fields() {
        form = form.text(name, value);
    }

    if let Some(image) = &draft.image {
        let bytes = tokio::fs::read(&image.path).await?;
        let part = Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)?;
        form = form.part("image", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use vyas_core::{Attachment, IssueType};

    /// Answer a single HTTP request with `status` and `body`, returning the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];

            // Read headers, then as much body as Content-Length announces
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&raw).to_string()
        });

        (addr, handle)
    }

    fn client_for(addr: SocketAddr) -> HttpClient {
        HttpClient::new(&Endpoints {
            base_url: format!("http://{}", addr),
            ..Endpoints::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_templates() {
        let client = HttpClient::new(&Endpoints::default()).unwrap();
        let url = client
            .endpoint_url("/api/rooms/floor/{floor_id}", "floor_id", "3")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/rooms/floor/3");

        let url = client
            .endpoint_url("/api/room/{number}", "number", "VY 404/")
            .unwrap();
        assert_eq!(url.path(), "/api/room/VY%20404%2F");

        let url = client
            .endpoint_url("/api/room/{number}", "number", "VY+404")
            .unwrap();
        assert_eq!(url.path(), "/api/room/VY+404");
    }

    #[test]
    fn test_base_url_without_path_support() {
        let client = HttpClient::new(&Endpoints {
            base_url: "mailto:facilities@mitwpu.edu.in".to_string(),
            ..Endpoints::default()
        })
        .unwrap();
        let result = client.endpoint_url("/api/assets/{room_id}", "room_id", "3");
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpClient::new(&Endpoints {
            base_url: "not a url".to_string(),
            ..Endpoints::default()
        });
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[tokio::test]
    async fn test_fetch_rooms() {
        let (addr, server) = serve_once(
            "200 OK",
            r#"{"success": true, "rooms": [{"id": 9, "number": "VY601", "room_type": "class", "status": "normal"}]}"#,
        )
        .await;

        let response = client_for(addr).rooms_on_floor(6).await.unwrap();
        assert!(response.success);
        assert_eq!(response.rooms[0].number, "VY601");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/rooms/floor/6 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_envelope() {
        let (addr, _server) = serve_once(
            "400 Bad Request",
            r#"{"success": false, "errors": ["Description is required"]}"#,
        )
        .await;

        let draft = ReportDraft {
            room_id: Some(42),
            ..Default::default()
        };
        let response = client_for(addr).submit_report("/report", &draft).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.errors, vec!["Description is required"]);
    }

    #[tokio::test]
    async fn test_error_status_without_json_body() {
        let (addr, _server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;

        let result = client_for(addr).assets_in_room(3).await;
        assert!(matches!(result, Err(Error::Status(502))));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let (addr, _server) = serve_once("200 OK", "not json").await;

        let result = client_for(addr).rooms_on_floor(1).await;
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_submit_sends_multipart_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("leak.png");
        std::fs::write(&image_path, b"\x89PNG fake").unwrap();

        let (addr, server) = serve_once(
            "200 OK",
            r#"{"success": true, "ticket_id": 12, "message": "Ticket submitted successfully"}"#,
        )
        .await;

        let draft = ReportDraft {
            reporter_name: "Asha".to_string(),
            prn: "1032210123".to_string(),
            reporter_email: "asha@mitwpu.edu.in".to_string(),
            room_id: Some(42),
            asset_id: None,
            issue_type: Some(IssueType::Plumbing),
            description: "Tap leaking".to_string(),
            image: Some(Attachment::from_path(&image_path).unwrap()),
        };
        let response = client_for(addr).submit_report("/report", &draft).await.unwrap();
        assert_eq!(response.ticket_id, Some(vyas_core::TicketId(12)));

        let request = server.await.unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /report HTTP/1.1"));
        assert!(lower.contains("x-requested-with: xmlhttprequest"));
        assert!(lower.contains("content-type: multipart/form-data"));
        assert!(request.contains("name=\"room_id\"\r\n\r\n42"));
        assert!(request.contains("name=\"issue_type\"\r\n\r\nplumbing"));
        assert!(request.contains("filename=\"leak.png\""));
    }
}
