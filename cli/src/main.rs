use clap::Parser;
use friendpath::app::{build_name_lookup, build_social_graph};
use friendpath::args::Args;
use friendpath::colors::ColorScheme;
use friendpath::display::{display_search_info, display_search_results};
use friendpath::json_output::{create_json_output, print_json_output};
use friendpath::search::{SearchRequest, SearchResult, create_search_request};
use friendpath_core::{Graph, bfs_find_path};

fn main() {
    let search_args = Args::parse();
    let colors = ColorScheme::new(!search_args.no_color);
    let graph = build_social_graph();
    let name_lookup = build_name_lookup(&graph);

    let search_request = match create_search_request(search_args, &name_lookup) {
        Ok(request) => request,
        Err(error_message) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error_message)));
            std::process::exit(1);
        }
    };

    if search_request.search_args.verbose && !search_request.search_args.json {
        display_search_info(&search_request, &colors);
    }

    let search_result = execute_pathfinding_search(search_request, &graph);

    if search_result.display_options.json {
        print_json_output(&create_json_output(&search_result));
    } else {
        display_search_results(search_result, &colors);
    }
}

fn execute_pathfinding_search(request: SearchRequest, graph: &Graph) -> SearchResult {
    let (path, nodes_inspected, elapsed_time) =
        bfs_find_path(graph, &request.from_person, &request.to_person);

    SearchResult {
        path,
        nodes_inspected,
        search_duration: elapsed_time,
        from_person: request.from_person,
        to_person: request.to_person,
        display_options: request.search_args,
    }
}
