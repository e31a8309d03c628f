use friendpath_core::clean_str;

use crate::app::NameLookup;
use crate::args::Args;

#[derive(Debug)]
pub struct SearchRequest {
    pub from_person: String,
    pub to_person: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub path: Option<Vec<String>>,
    pub nodes_inspected: usize,
    pub search_duration: f64,
    pub from_person: String,
    pub to_person: String,
    pub display_options: Args,
}

pub fn find_best_person_match(name: &str, name_lookup: &NameLookup) -> Result<String, String> {
    let clean_query = clean_str(name);

    if let Some(person_ids) = name_lookup.get(&clean_query) {
        if person_ids.is_empty() {
            return Err(format!("'{}' is not part of this circle", name));
        }

        // Several spellings can clean to the same name - prefer the one
        // matching the query exactly
        for person_id in person_ids {
            if person_id == name {
                return Ok(person_id.clone());
            }
        }

        return Ok(person_ids[0].clone());
    }

    Err(format!("'{}' is not part of this circle", name))
}

pub fn create_search_request(args: Args, name_lookup: &NameLookup) -> Result<SearchRequest, String> {
    let from_person = find_best_person_match(&args.from, name_lookup)?;
    let to_person = find_best_person_match(&args.to, name_lookup)?;

    Ok(SearchRequest {
        from_person,
        to_person,
        search_args: args,
    })
}
