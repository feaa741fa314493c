use std::io::Read;

use anyhow::{anyhow, Result};
use axum::extract::Multipart;
use flate2::read::GzDecoder;
use tracing::warn;

use backend_domain::ImportRow;

pub const UPLOAD_FIELD: &str = "file";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const UTF8_BOM: char = '\u{feff}';

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Pulls the `file` part out of a multipart form. A single unnamed file part
/// is accepted as well so plain `curl -F @data.csv` uploads work.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile> {
    let mut fallback = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| anyhow!("invalid multipart body: {}", err))?
    {
        let is_upload_field = field.name() == Some(UPLOAD_FIELD);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        if !is_upload_field && file_name.is_none() {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|err| anyhow!("failed to read upload: {}", err))?
            .to_vec();
        let upload = UploadedFile {
            file_name,
            content_type,
            bytes,
        };
        if is_upload_field {
            return Ok(upload);
        }
        if fallback.is_none() {
            fallback = Some(upload);
        }
    }
    fallback.ok_or_else(|| anyhow!("missing '{}' field in upload", UPLOAD_FIELD))
}

pub fn parse_upload(upload: &UploadedFile) -> Result<Vec<ImportRow>> {
    let content = maybe_gunzip(upload)?;
    parse_csv_rows(&content)
}

fn maybe_gunzip(upload: &UploadedFile) -> Result<Vec<u8>> {
    if !is_gzip(upload) {
        return Ok(upload.bytes.clone());
    }
    let mut decoder = GzDecoder::new(upload.bytes.as_slice());
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|err| anyhow!("failed to decompress upload: {}", err))?;
    Ok(out)
}

fn is_gzip(upload: &UploadedFile) -> bool {
    upload.bytes.starts_with(&GZIP_MAGIC)
}

/// Reads a header-led CSV document into raw rows. Cells that are not valid
/// UTF-8 are decoded lossily so the row still reaches the normalizer; only
/// records the CSV reader itself cannot read are skipped. Short rows simply
/// miss their trailing columns.
pub fn parse_csv_rows(content: &[u8]) -> Result<Vec<ImportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);
    let headers = reader
        .byte_headers()
        .map_err(|err| anyhow!("unreadable header row: {}", err))?
        .iter()
        .map(|name| decode_cell(name).trim_start_matches(UTF8_BOM).trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping unreadable csv record {}: {}", index + 1, err);
                continue;
            }
        };
        let row = headers
            .iter()
            .zip(record.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.clone(), decode_cell(value)))
            .collect::<ImportRow>();
        rows.push(row);
    }
    Ok(rows)
}

fn decode_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
