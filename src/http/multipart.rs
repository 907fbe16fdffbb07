use reqwest::multipart::{Form, Part};

use super::AttachmentType;
use crate::internal::prelude::*;

/// Holder for a multipart body. Contains the files to upload alongside the
/// JSON payload that would otherwise have been the request body.
#[derive(Debug)]
pub struct Multipart<'a> {
    pub files: Vec<AttachmentType<'a>>,
    /// JSON body that will be stringified and set as the form value as
    /// `payload_json`.
    pub payload_json: Option<Value>,
}

impl<'a> Multipart<'a> {
    pub(crate) async fn build_form(&mut self) -> Result<Form> {
        let mut multipart = Form::new();

        for (file_num, file) in self.files.iter().enumerate() {
            // Single-file endpoints error unless the part is named `file`.
            let part_name =
                if file_num == 0 { "file".to_string() } else { format!("file{}", file_num) };

            let data = file.data().await?;
            let filename = file.filename();

            let mut part = Part::bytes(data);
            if let Some(filename) = filename {
                part = guess_mime_str(part, &filename)?;
                part = part.file_name(filename);
            }
            multipart = multipart.part(part_name, part);
        }

        if let Some(ref payload_json) = self.payload_json {
            multipart = multipart.text("payload_json", serde_json::to_string(payload_json)?);
        }

        Ok(multipart)
    }
}

fn guess_mime_str(part: Part, filename: &str) -> Result<Part> {
    // Some endpoints 500 without an explicit mime type on each part. The
    // type chosen mirrors what reqwest infers for Part::file().
    let mime_type = mime_guess::from_path(filename).first_or_octet_stream();

    part.mime_str(mime_type.essence_str()).map_err(|e| Error::Http(Box::new(e.into())))
}
