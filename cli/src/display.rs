use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "👥 Finding path from {} to {}",
        colors.person_name(&format!("\"{}\"", request.from_person)),
        colors.person_name(&format!("\"{}\"", request.to_person))
    );

    println!("⚙️  Using shortest hop pathfinding (BFS)");

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => {
            display_successful_path(path, &result.display_options, colors);
            if is_verbose {
                display_search_statistics(result.nodes_inspected, result.search_duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.person_name(&format!("\"{}\"", result.from_person)),
                colors.person_name(&format!("\"{}\"", result.to_person))
            );
            if is_verbose {
                display_search_statistics(result.nodes_inspected, result.search_duration, colors);
            }
        }
    }
}

fn display_successful_path(path: &[String], display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        let step_count = path.len() - 1;
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&step_count.to_string())
        );
    }

    // Show path flow first
    let separator = colors.path_arrow(&display_options.separator).to_string();
    let path_flow = path
        .iter()
        .map(|person| colors.person_name(person).to_string())
        .collect::<Vec<_>>()
        .join(&separator);
    println!("{}", path_flow);

    // Show numbered step list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (step_index, person) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            println!(
                "{:2} {}",
                colors.step_number(&step_number),
                colors.person_name(&format!("\"{}\"", person))
            );
        }
    }
}

fn display_search_statistics(nodes_inspected: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Inspected {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_inspected)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
