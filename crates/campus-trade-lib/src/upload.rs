use crate::{error::Error, settings::Settings};

/// Rejects files the server would refuse on upload.
pub fn check_image(name: &str, size: u64, settings: &Settings) -> Result<(), Error> {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| Error::UnsupportedFile(name.to_string()))?;

    if !settings.allowed_extensions.iter().any(|allowed| *allowed == extension) {
        return Err(Error::UnsupportedFile(name.to_string()));
    }

    if size > settings.max_upload_bytes {
        return Err(Error::FileTooLarge {
            name: name.to_string(),
            size,
        });
    }

    Ok(())
}

/// Text shown to the user for a file [`check_image`] refused.
pub fn rejection_notice(error: &Error, settings: &Settings) -> String {
    match error {
        Error::UnsupportedFile(name) => format!(
            "{} 不是支持的图片格式（{}）",
            name,
            settings.allowed_extensions.join(", ")
        ),
        Error::FileTooLarge { name, .. } => format!(
            "{} 超过 {}MB 的上传限制",
            name,
            settings.max_upload_bytes / (1024 * 1024)
        ),
        other => other.to_string(),
    }
}
