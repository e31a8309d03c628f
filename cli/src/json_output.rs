use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_inspected: usize,
}

pub fn create_json_output(result: &SearchResult) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            from: result.from_person.clone(),
            to: result.to_person.clone(),
        },
        result: JsonResult {
            found: result.path.is_some(),
            path: result.path.clone(),
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_inspected: result.nodes_inspected,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
