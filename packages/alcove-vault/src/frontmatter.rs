use serde::{Deserialize, Serialize};

/// YAML metadata block at the top of a vault document, delimited by `---`
/// lines. Every field is optional; an absent block yields the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}

/// Splits a raw file into its front-matter and body. Text without an opening
/// `---` line, or with an unterminated block, is treated as all body.
pub fn split(raw: &str) -> Result<(FrontMatter, &str), serde_yaml::Error> {
	let Some(after_open) = raw.strip_prefix("---\n").or_else(|| raw.strip_prefix("---\r\n"))
	else {
		return Ok((FrontMatter::default(), raw));
	};
	let mut close = None;
	let mut offset = 0;

	for line in after_open.split_inclusive('\n') {
		if line.trim_end() == "---" {
			close = Some((offset, offset + line.len()));

			break;
		}

		offset += line.len();
	}

	let Some((yaml_end, body_start)) = close else {
		return Ok((FrontMatter::default(), raw));
	};
	let yaml = &after_open[..yaml_end];
	let body = &after_open[body_start..];
	// One newline after the closing delimiter separates the block from the
	// body; it is formatting, not content. [`to_markdown`] writes it back.
	let body = body.strip_prefix("\r\n").or_else(|| body.strip_prefix('\n')).unwrap_or(body);
	let front_matter =
		if yaml.trim().is_empty() { FrontMatter::default() } else { serde_yaml::from_str(yaml)? };

	Ok((front_matter, body))
}

/// Renders a front-matter block and body back into file form, the inverse
/// of [`split`] modulo YAML formatting.
pub fn to_markdown(front_matter: &FrontMatter, body: &str) -> Result<String, serde_yaml::Error> {
	let yaml = serde_yaml::to_string(front_matter)?;

	Ok(format!("---\n{yaml}---\n\n{body}"))
}
