use crate::{
    abstract_trait::transport::{HttpTransportTrait, RawResponse},
    builder::PreparedRequest,
    domain::requests::api::{FormPart, FormPayload, RequestBody},
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use shared::{errors::ClientError, utils::Method};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_multipart(form: FormPayload) -> Result<Form, ClientError> {
    form.into_parts()
        .into_iter()
        .try_fold(Form::new(), |form, part| match part {
            FormPart::Text { name, value } => Ok(form.text(name, value)),
            FormPart::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let mut part = Part::bytes(bytes).file_name(file_name);
                if let Some(mime_type) = mime_type {
                    part = part.mime_str(&mime_type)?;
                }
                Ok(form.part(name, part))
            }
        })
}

#[async_trait]
impl HttpTransportTrait for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ClientError> {
        debug!("{} {}", request.method.as_str(), request.url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url)
            .headers(request.headers);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes),
            RequestBody::Form(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_owned),
            body: body.to_vec(),
        })
    }
}
