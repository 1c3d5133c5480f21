// Command-line interface for byline
//
// This binary works with byline post documents outside the web application:
// normalizing editor exports, projecting stored documents to HTML or an
// outline, generating and checking slugs, and validating post payloads.
//
// Converting:
//
// The convert command takes an editor JSON export, normalizes it (the same
// canonicalization the application applies before persisting), and projects
// the result. The target projection can be given with --to or detected from
// the output file extension.
// Usage:
//  byline <input> --to <projection> [--output <file>]   - Convert (default)
//  byline convert <input> --to <projection> [-o <file>] - Same as above (explicit)
//  byline normalize <input> [-o <file>]                 - Canonical JSON only
//  byline slug <text> [--check]                         - Derive or validate a slug
//  byline check <post.json>                             - Validate a post payload
//  byline --list-projections                            - List available projections
//
// Extra Parameters:
//
// Projection-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the projection.
// Example:
//  byline post.json --to html --extra-standalone --extra-title "My Post"

use byline_config::{BylineConfig, Loader};
use byline_doc::model::parse_content;
use byline_doc::post::{validate_post_input, PostInput, PostLimits};
use byline_doc::{is_valid_slug, normalize, slugify, ProjectionRegistry};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("byline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for normalizing and projecting byline post documents")
        .long_about(
            "byline is a command-line tool for working with post documents.\n\n\
            Commands:\n  \
            - convert:   Normalize an editor export and project it (html, toc, text, json)\n  \
            - normalize: Normalize an editor export to canonical JSON\n  \
            - slug:      Derive a URL slug from a title, or validate one\n  \
            - check:     Validate a post payload\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass projection-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            byline post.json --to html                   # Render to HTML (stdout)\n  \
            byline post.json --to html --extra-standalone # Complete preview page\n  \
            byline post.json -o post.html                # Projection from extension\n  \
            byline slug \"My First Post\"                  # my-first-post",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-projections")
                .long("list-projections")
                .help("List available projections")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a byline.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Normalize an editor export and project it (default command)")
                .long_about(
                    "Normalize an editor JSON export and project the canonical document.\n\n\
                    Available projections:\n  \
                    - html: Article body fragment (--extra-standalone for a full page)\n  \
                    - toc:  Section outline as JSON\n  \
                    - text: Plain-text flattening\n  \
                    - json: Canonical document JSON\n\n\
                    The projection is taken from --to, or detected from the output\n\
                    file extension when -o is given.\n\n\
                    Examples:\n  \
                    byline convert post.json --to html           # HTML fragment (stdout)\n  \
                    byline convert post.json -o post.html        # Detected from extension\n  \
                    byline post.json --to toc                    # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input editor JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target projection (html, toc, text, json)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize an editor export to canonical JSON")
                .long_about(
                    "Apply the same canonicalization the application performs before\n\
                    persisting a post: wrap the export in a doc root and establish the\n\
                    leading title heading.\n\n\
                    Examples:\n  \
                    byline normalize draft.json                # Canonical JSON to stdout\n  \
                    byline normalize draft.json -o post.json   # Write to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input editor JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("slug")
                .about("Derive a URL slug from text, or validate one")
                .arg(
                    Arg::new("text")
                        .help("Title text (or a slug with --check)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Validate the argument as a post URL slug instead")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a post payload file")
                .long_about(
                    "Validate a post create/update payload (title, slug, content,\n\
                    description, tags) against the configured limits. Prints one line\n\
                    per failed check and exits non-zero when the payload is invalid.",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to a post payload JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !matches!(
                    cleaned_args[1].as_str(),
                    "convert" | "normalize" | "slug" | "check" | "help"
                )
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-projections") {
        handle_list_projections_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, Some("json"), output, &extra_params, &config);
        }
        Some(("slug", sub_matches)) => {
            let text = sub_matches
                .get_one::<String>("text")
                .expect("text is required");
            let check = sub_matches.get_flag("check");
            handle_slug_command(text, check);
        }
        Some(("check", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_check_command(input, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command (and normalize, which is convert --to json)
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BylineConfig,
) {
    let registry = ProjectionRegistry::default();

    // Resolve the target projection: explicit --to, or the output extension
    let projection = match to {
        Some(name) => name.to_string(),
        None => match output.and_then(|path| registry.detect_projection_from_filename(path)) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: No projection given");
                eprintln!("Pass --to <projection> or an --output path with a known extension");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = registry.get(&projection) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let content = parse_content(&source).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let doc = normalize(content);

    let options = build_projection_options(config, extra_params);
    let result = registry
        .project_with_options(&doc, &projection, &options)
        .unwrap_or_else(|e| {
            eprintln!("Projection error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the slug command
fn handle_slug_command(text: &str, check: bool) {
    if check {
        if is_valid_slug(text) {
            println!("valid");
        } else {
            eprintln!("Invalid slug: '{text}' (expected lowercase alphanumeric with hyphens)");
            std::process::exit(1);
        }
        return;
    }

    let slug = slugify(text);
    if slug.is_empty() {
        eprintln!("No slug could be derived from '{text}'");
        std::process::exit(1);
    }
    println!("{slug}");
}

/// Handle the check command
fn handle_check_command(input: &str, config: &BylineConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let payload: PostInput = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing post payload: {e}");
        std::process::exit(1);
    });

    let limits: PostLimits = (&config.limits).into();
    let result = validate_post_input(&payload, &limits);

    if result.is_valid() {
        println!("ok");
        return;
    }

    for error in &result.errors {
        eprintln!("{}: {}", error.field, error.message);
    }
    std::process::exit(1);
}

/// Handle the list-projections command
fn handle_list_projections_command() {
    let registry = ProjectionRegistry::default();
    println!("Available projections:\n");
    for name in registry.list_projections() {
        match registry.get(&name) {
            Ok(projection) => println!("  {name:<6} {}", projection.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BylineConfig {
    let loader = Loader::new().with_optional_file("byline.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Merge configured render settings with --extra-* overrides into the
/// option map handed to the projection.
fn build_projection_options(
    config: &BylineConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = HashMap::new();

    if config.render.html.standalone {
        options.insert("standalone".to_string(), "true".to_string());
    }
    if let Some(css_path) = &config.render.html.custom_css {
        options.insert("css".to_string(), read_css_file(css_path));
    }

    for (key, value) in extra_params {
        if key == "css" {
            options.insert("css".to_string(), read_css_file(value));
        } else {
            options.insert(key.clone(), value.clone());
        }
    }

    options
}

fn read_css_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading CSS file '{path}': {e}");
        std::process::exit(1);
    })
}
