use anyhow::Result;
use serde_json::{Value, json};
use sitepick::{SearchOutcome, SearchRecord};

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match outcome.target_url() {
		Some(url) => println!("{url}"),
		None => println!("No selection"),
	}
}

fn record_json(record: &SearchRecord) -> Value {
	json!({
		"title": record.title,
		"excerpt": record.excerpt,
		"url": record.url,
	})
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = outcome
		.selection
		.as_ref()
		.map_or(Value::Null, record_json);

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print one `title<TAB>url` line per matching record.
pub(crate) fn print_matches_plain(records: &[&SearchRecord]) {
	for record in records {
		println!("{}\t{}", record.title, record.url);
	}
}

pub(crate) fn format_matches_json(query: &str, records: &[&SearchRecord]) -> Result<String> {
	let payload = json!({
		"query": query,
		"matches": records.iter().map(|record| record_json(record)).collect::<Vec<_>>(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn json_format_includes_selected_record() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "kaf".into(),
			selection: Some(SearchRecord::new("Apache Kafka", "streaming", "/a")),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "kaf");
		assert_eq!(value["selection"]["title"], "Apache Kafka");
		assert_eq!(value["selection"]["url"], "/a");
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "zzz".into(),
			selection: None,
		};
		let value: Value = serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}

	#[test]
	fn matches_json_lists_records_in_order() {
		let kafka = SearchRecord::new("Apache Kafka", "streaming", "/a");
		let swim = SearchRecord::new("Swim AI", "actors", "/b");
		let json = format_matches_json("a", &[&kafka, &swim]).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["matches"][0]["url"], "/a");
		assert_eq!(value["matches"][1]["title"], "Swim AI");
	}
}
