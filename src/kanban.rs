//! Parsing of KANBAN.md into structured issue records.
//!
//! An entry heading has the shape `<number>. **[<TAG>] <title>**`. Everything
//! from a heading's start to the start of the next heading (or end of file)
//! belongs to that entry's body. Headings are matched anywhere in the text,
//! not just at line starts; anything that does not match the shape exactly is
//! silently skipped rather than reported.

/// Label attached to every issue this tool creates, and used to recognize
/// them again on later runs.
pub const SYNC_MARKER_LABEL: &str = "kanban-sync";

/// One parsed kanban entry. Immutable once constructed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssueRecord {
	/// Sequence number as written in the document.
	pub number: u64,
	/// Bracketed tag from the heading, e.g. `TASK` or `FEATURE`.
	pub kind: String,
	/// Heading title, trimmed.
	pub title: String,
	/// Full raw section text, used verbatim as the issue body.
	pub body: String,
	/// Explicit `Labels:` tokens plus derived phase/priority labels and
	/// [`SYNC_MARKER_LABEL`]. Insertion-ordered, no duplicates.
	pub labels: Vec<String>,
	/// `"[{kind}] {title}"` - the issue title on GitHub and the key used to
	/// decide whether the entry already exists there.
	pub github_title: String,
}

/// Parse a kanban document into records, in document order.
///
/// Returns an empty vec when nothing matches the heading shape. Two entries
/// sharing a composed title are both returned; deduplication is left to the
/// tracker side.
pub fn parse_kanban(content: &str) -> Vec<IssueRecord> {
	let mut records = Vec::new();
	let mut search_from = 0;

	while let Some(heading) = find_heading(content, search_from) {
		// Body runs up to the next heading that starts its own line, or EOF.
		let section_end = find_section_boundary(content, heading.start + 1).unwrap_or(content.len());
		let body = content[heading.start..section_end].trim().to_string();

		let mut labels = extract_labels(&body);
		let phase = extract_phase(&body);
		let priority = extract_priority(&body);
		for derived in [phase.to_string(), format!("priority-{priority}"), SYNC_MARKER_LABEL.to_string()] {
			if !labels.contains(&derived) {
				labels.push(derived);
			}
		}

		let github_title = format!("[{}] {}", heading.kind, heading.title);
		records.push(IssueRecord {
			number: heading.number,
			kind: heading.kind,
			title: heading.title,
			body,
			labels,
			github_title,
		});

		search_from = heading.end;
	}

	records
}

struct HeadingMatch {
	/// Byte offset of the first digit.
	start: usize,
	/// Byte offset just past the closing `**`.
	end: usize,
	number: u64,
	kind: String,
	title: String,
}

fn char_at(text: &str, pos: usize) -> Option<char> {
	text.get(pos..).and_then(|s| s.chars().next())
}

/// Try to match a full entry heading starting exactly at `start`.
fn match_heading_at(text: &str, start: usize) -> Option<HeadingMatch> {
	let mut pos = start;

	let digits_start = pos;
	while let Some(c) = char_at(text, pos) {
		if !c.is_ascii_digit() {
			break;
		}
		pos += c.len_utf8();
	}
	if pos == digits_start {
		return None;
	}
	let number: u64 = text[digits_start..pos].parse().ok()?;

	if char_at(text, pos) != Some('.') {
		return None;
	}
	pos += 1;

	// Exactly one whitespace character between the dot and the bold span.
	let ws = char_at(text, pos)?;
	if !ws.is_whitespace() {
		return None;
	}
	pos += ws.len_utf8();

	if !text[pos..].starts_with("**[") {
		return None;
	}
	pos += 3;

	let kind_start = pos;
	while let Some(c) = char_at(text, pos) {
		if !c.is_alphanumeric() && c != '_' {
			break;
		}
		pos += c.len_utf8();
	}
	if pos == kind_start {
		return None;
	}
	let kind = text[kind_start..pos].to_string();

	if char_at(text, pos) != Some(']') {
		return None;
	}
	pos += 1;

	let ws = char_at(text, pos)?;
	if !ws.is_whitespace() {
		return None;
	}
	pos += ws.len_utf8();

	// Title runs up to the closing `**` and may not contain `*` itself.
	let title_start = pos;
	while let Some(c) = char_at(text, pos) {
		if c == '*' {
			break;
		}
		pos += c.len_utf8();
	}
	if pos == title_start || !text[pos..].starts_with("**") {
		return None;
	}
	let title = text[title_start..pos].trim().to_string();
	pos += 2;

	Some(HeadingMatch { start, end: pos, number, kind, title })
}

/// Find the leftmost heading starting at or after `from`.
fn find_heading(text: &str, from: usize) -> Option<HeadingMatch> {
	let mut pos = from;
	while pos < text.len() {
		if let Some(m) = match_heading_at(text, pos) {
			return Some(m);
		}
		pos += char_at(text, pos).map(char::len_utf8).unwrap_or(1);
	}
	None
}

/// Find the next section boundary at or after `from`: a newline immediately
/// followed by a heading prefix (`<digits>.<ws>**[`). Returns the byte offset
/// of the newline. Indented sub-items fail the check and stay in the current
/// section.
fn find_section_boundary(text: &str, from: usize) -> Option<usize> {
	let bytes = text.as_bytes();
	let mut pos = from;
	while pos < text.len() {
		if bytes[pos] == b'\n' && matches_heading_prefix(text, pos + 1) {
			return Some(pos);
		}
		pos += 1;
	}
	None
}

fn matches_heading_prefix(text: &str, start: usize) -> bool {
	let mut pos = start;
	let digits_start = pos;
	while let Some(c) = char_at(text, pos) {
		if !c.is_ascii_digit() {
			break;
		}
		pos += c.len_utf8();
	}
	if pos == digits_start || char_at(text, pos) != Some('.') {
		return false;
	}
	pos += 1;
	let Some(ws) = char_at(text, pos) else { return false };
	if !ws.is_whitespace() {
		return false;
	}
	pos += ws.len_utf8();
	text[pos..].starts_with("**[")
}

/// Extract the first ``Labels: `a, b, c` `` declaration in the section.
/// Occurrences without a non-empty backtick group are passed over.
fn extract_labels(section: &str) -> Vec<String> {
	let mut search_from = 0;
	while let Some(rel) = section[search_from..].find("Labels:") {
		let occurrence = search_from + rel;
		let mut pos = occurrence + "Labels:".len();
		while let Some(c) = char_at(section, pos) {
			if !c.is_whitespace() {
				break;
			}
			pos += c.len_utf8();
		}
		if char_at(section, pos) == Some('`') {
			pos += 1;
			if let Some(close) = section[pos..].find('`')
				&& close > 0
			{
				return section[pos..pos + close].split(',').map(|label| label.trim().to_string()).collect();
			}
		}
		search_from = occurrence + 1;
	}
	Vec::new()
}

/// Priority marker scan, first match in severity order wins. Plain substring
/// search over the whole section, matching markers anywhere in the text.
fn extract_priority(section: &str) -> &'static str {
	if section.contains("priority-critical") {
		"critical"
	} else if section.contains("priority-high") {
		"high"
	} else if section.contains("priority-low") {
		"low"
	} else {
		"medium"
	}
}

/// Phase marker scan, first match in phase order wins.
fn extract_phase(section: &str) -> &'static str {
	if section.contains("phase-1") {
		"phase-1-foundation"
	} else if section.contains("phase-2") {
		"phase-2-characters"
	} else if section.contains("phase-3") {
		"phase-3-atlas"
	} else if section.contains("phase-4") {
		"phase-4-evaluation"
	} else if section.contains("phase-5") {
		"phase-5-polish"
	} else {
		"unknown"
	}
}
