use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};

use qmx::qm::{essential_implicants, prime_implicants, reduce_implicants};
use qmx::{Implicant, generate_variable_names, simplify_with_profile};

#[derive(Debug, Serialize, Deserialize)]
struct MinimizeRequest {
    ones: Vec<u64>,
    dont_cares: Option<Vec<u64>>,
    num_bits: Option<usize>,
    use_xor: Option<bool>,
    variable_names: Option<Vec<String>>, // A, B, C, etc.
}

#[derive(Debug, Serialize)]
struct MinimizeResponse {
    ones: Vec<u64>,
    dont_cares: Vec<u64>,
    num_bits: usize,
    use_xor: bool,
    implicants: Vec<String>,
    expression: String,
    profile: ProfileCounters,
    steps: Option<Vec<String>>, // For educational purposes
}

#[derive(Debug, Serialize)]
struct ProfileCounters {
    cmp: u64,
    xor: u64,
    xnor: u64,
}

fn main() {
    let matches = Command::new("qmx")
        .version("0.1.0")
        .about("Quine-McCluskey Boolean minimization with XOR/XNOR implicants")
        .subcommand(
            Command::new("minimize")
                .about("Minimize a Boolean function")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Input: JSON file path, inline JSON, or natural language")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["json", "human", "table"])
                        .default_value("human"),
                )
                .arg(
                    Arg::new("xor")
                        .long("xor")
                        .help("Allow XOR/XNOR implicants in the result")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("show-steps")
                        .long("show-steps")
                        .help("Show per-stage counts")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("interactive").about("Interactive mode for complex queries"))
        .subcommand(Command::new("examples").about("Show usage examples"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("minimize", sub_matches)) => handle_minimize(sub_matches),
        Some(("interactive", _)) => handle_interactive(),
        Some(("examples", _)) => handle_examples(),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_minimize(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required by clap");
    let format = matches
        .get_one::<String>("format")
        .expect("format has default value in clap");
    let use_xor = matches.get_flag("xor");
    let show_steps = matches.get_flag("show-steps");

    let mut request = parse_input(input)?;
    if use_xor {
        request.use_xor = Some(true);
    }

    let response = run_minimize(&request, show_steps)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&response)?),
        "human" => print_human_readable(&response),
        "table" => print_table_format(&response),
        _ => return Err(anyhow!("Unknown format: {}", format)),
    }

    Ok(())
}

fn parse_input(input: &str) -> Result<MinimizeRequest> {
    // Try parsing as file path first
    if let Ok(file_content) = fs::read_to_string(input)
        && let Ok(request) = serde_json::from_str::<MinimizeRequest>(&file_content)
    {
        return Ok(request);
    }

    // Try parsing as inline JSON
    if let Ok(request) = serde_json::from_str::<MinimizeRequest>(input) {
        return Ok(request);
    }

    // Parse natural language formats
    parse_natural_input(input)
}

fn parse_natural_input(input: &str) -> Result<MinimizeRequest> {
    let input = input.trim();

    // Pattern 1: f(A,B,C) = Σ(1,3,7) + d(2,4)
    let sigma_pattern =
        Regex::new(r"f\(([A-Za-z,\s]+)\)\s*=\s*Σ\(([0-9,\s]*)\)(?:\s*\+\s*d\(([0-9,\s]*)\))?")?;
    if let Some(caps) = sigma_pattern.captures(input) {
        let variables: Vec<String> = caps[1].split(',').map(|s| s.trim().to_string()).collect();
        let ones = parse_number_list(&caps[2])?;
        let dont_cares = caps
            .get(3)
            .map(|m| parse_number_list(m.as_str()))
            .transpose()?;

        return Ok(MinimizeRequest {
            ones,
            dont_cares,
            num_bits: Some(variables.len()),
            use_xor: None,
            variable_names: Some(variables),
        });
    }

    // Pattern 2: "minimize minterms 1,3,7 with 3 variables"
    let simple_pattern = Regex::new(r"minimize\s+minterms?\s+([0-9,\s]+)\s+with\s+(\d+)\s+variables?")?;
    if let Some(caps) = simple_pattern.captures(input) {
        let ones = parse_number_list(&caps[1])?;
        let num_bits: usize = caps[2].parse()?;

        return Ok(MinimizeRequest {
            ones,
            dont_cares: None,
            num_bits: Some(num_bits),
            use_xor: None,
            variable_names: None,
        });
    }

    // Pattern 3: Truth table format "truth table: 0110x01x"
    let tt_pattern = Regex::new(r"truth\s+table:\s*([01xX]+)")?;
    if let Some(caps) = tt_pattern.captures(input) {
        let truth_table = &caps[1];
        if !truth_table.len().is_power_of_two() {
            return Err(anyhow!(
                "truth table length must be a power of two, got {}",
                truth_table.len()
            ));
        }
        let num_bits = truth_table.len().ilog2() as usize;
        let mut ones = Vec::new();
        let mut dont_cares = Vec::new();
        for (i, c) in truth_table.chars().enumerate() {
            match c {
                '1' => ones.push(i as u64),
                'x' | 'X' => dont_cares.push(i as u64),
                _ => {}
            }
        }

        return Ok(MinimizeRequest {
            ones,
            dont_cares: Some(dont_cares),
            num_bits: Some(num_bits),
            use_xor: None,
            variable_names: None,
        });
    }

    Err(anyhow!(
        "Could not parse input format. Supported formats:\n\
        - JSON: {{\"ones\": [1,3,7], \"num_bits\": 3}}\n\
        - Function notation: f(A,B,C) = Σ(1,3,7)\n\
        - With don't cares: f(A,B,C) = Σ(1,3,7) + d(2,4)\n\
        - Simple: minimize minterms 1,3,7 with 3 variables\n\
        - Truth table: truth table: 0110x01x"
    ))
}

fn parse_number_list(input: &str) -> Result<Vec<u64>> {
    input
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse()
                .map_err(|e| anyhow!("Failed to parse minterm '{}': {}", s.trim(), e))
        })
        .collect()
}

fn run_minimize(request: &MinimizeRequest, show_steps: bool) -> Result<MinimizeResponse> {
    let dont_cares = request.dont_cares.clone().unwrap_or_default();
    let use_xor = request.use_xor.unwrap_or(false);

    let outcome = simplify_with_profile(&request.ones, &dont_cares, request.num_bits, use_xor);
    let Some(implicants) = outcome.result else {
        return Err(anyhow!("no result: at least one minterm is required"));
    };

    let num_bits = implicants
        .iter()
        .next()
        .map(Implicant::len)
        .unwrap_or_default();
    let variable_names = request
        .variable_names
        .clone()
        .unwrap_or_else(|| generate_variable_names(num_bits));
    if variable_names.len() != num_bits {
        return Err(anyhow!(
            "expected {} variable names, got {}",
            num_bits,
            variable_names.len()
        ));
    }

    let mut implicant_strings: Vec<String> = implicants.iter().map(|t| t.to_string()).collect();
    implicant_strings.sort();

    let mut sorted: Vec<&Implicant> = implicants.iter().collect();
    sorted.sort();
    let expression = sorted
        .iter()
        .map(|t| t.to_expression(&variable_names))
        .collect::<Vec<_>>()
        .join(" + ");

    let steps = if show_steps {
        Some(collect_steps(&request.ones, &dont_cares, num_bits, use_xor))
    } else {
        None
    };

    Ok(MinimizeResponse {
        ones: request.ones.clone(),
        dont_cares,
        num_bits,
        use_xor,
        implicants: implicant_strings,
        expression,
        profile: ProfileCounters {
            cmp: outcome.profile.cmp,
            xor: outcome.profile.xor,
            xnor: outcome.profile.xnor,
        },
        steps,
    })
}

/// Re-run the pipeline stage by stage to report per-stage counts.
fn collect_steps(ones: &[u64], dont_cares: &[u64], num_bits: usize, use_xor: bool) -> Vec<String> {
    let ones: HashSet<Implicant> = ones
        .iter()
        .map(|&m| Implicant::from_minterm(m, num_bits))
        .collect();
    let dc: HashSet<Implicant> = dont_cares
        .iter()
        .map(|&m| Implicant::from_minterm(m, num_bits))
        .collect();
    let terms: HashSet<Implicant> = ones.union(&dc).cloned().collect();

    let mut steps = Vec::new();
    steps.push(format!(
        "Input: {} ones, {} don't cares, {} bits",
        ones.len(),
        dc.len(),
        num_bits
    ));

    let (prime, profile) = prime_implicants(use_xor, &terms);
    steps.push(format!(
        "Prime implicants: {} ({} adjacency, {} XOR, {} XNOR probes)",
        prime.len(),
        profile.cmp,
        profile.xor,
        profile.xnor
    ));

    let essential = essential_implicants(num_bits, &prime, &dc);
    steps.push(format!("Essential implicants: {}", essential.len()));

    let reduced = reduce_implicants(num_bits, &essential, &dc);
    steps.push(format!("After reduction: {}", reduced.len()));

    steps
}

fn print_human_readable(response: &MinimizeResponse) {
    println!("🔍 Quine-McCluskey Minimization Result");
    println!("══════════════════════════════════════");

    println!("\n📊 Input:");
    println!("   Ones: {:?}", response.ones);
    if !response.dont_cares.is_empty() {
        println!("   Don't cares: {:?}", response.dont_cares);
    }
    println!("   Bits: {} (XOR {})", response.num_bits, if response.use_xor { "on" } else { "off" });

    println!("\n✨ Minimized Expression:");
    println!("   F = {}", response.expression);

    println!("\n🎯 Implicants:");
    for implicant in &response.implicants {
        println!("   • {}", implicant);
    }

    println!(
        "\n⚙️  Merge probes: {} adjacency, {} XOR, {} XNOR",
        response.profile.cmp, response.profile.xor, response.profile.xnor
    );

    if let Some(ref steps) = response.steps {
        println!("\n📝 Solution Steps:");
        for (i, step) in steps.iter().enumerate() {
            println!("   {}. {}", i + 1, step);
        }
    }
}

fn print_table_format(response: &MinimizeResponse) {
    println!("Truth Table:");
    println!(
        "{}",
        format_truth_table(&response.ones, &response.dont_cares, response.num_bits)
    );
    println!("\nMinimized Expression: {}", response.expression);
}

fn format_truth_table(ones: &[u64], dont_cares: &[u64], num_bits: usize) -> String {
    let total_rows = 1u64 << num_bits;
    let ones_set: HashSet<u64> = ones.iter().copied().collect();
    let dont_care_set: HashSet<u64> = dont_cares.iter().copied().collect();

    let mut table = String::new();

    // Header
    for name in generate_variable_names(num_bits) {
        table.push_str(&name);
        table.push(' ');
    }
    table.push_str("| F\n");
    table.push_str(&"-".repeat(num_bits * 2 + 4));
    table.push('\n');

    // Rows
    for i in 0..total_rows {
        for j in (0..num_bits).rev() {
            table.push_str(&format!("{} ", (i >> j) & 1));
        }
        table.push_str("| ");

        if ones_set.contains(&i) {
            table.push('1');
        } else if dont_care_set.contains(&i) {
            table.push('X');
        } else {
            table.push('0');
        }
        table.push('\n');
    }

    table
}

fn handle_interactive() -> Result<()> {
    println!("🚀 qmx Interactive Mode");
    println!("=======================");
    println!("Enter Boolean functions in various formats:");
    println!("• JSON: {{\"ones\": [1,3,7], \"num_bits\": 3}}");
    println!("• Function: f(A,B,C) = Σ(1,3,7)");
    println!("• With don't cares: f(A,B,C) = Σ(1,3,7) + d(2,4)");
    println!("• Simple: minimize minterms 1,3,7 with 3 variables");
    println!("• Truth table: truth table: 0110x01x");
    println!("• Type 'help' for more options, 'quit' to exit\n");

    loop {
        print!("qmx> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "quit" | "exit" => break,
            "help" => print_interactive_help(),
            "examples" => print_examples(),
            "" => continue,
            _ => match parse_input(input) {
                Ok(request) => match run_minimize(&request, false) {
                    Ok(response) => {
                        println!();
                        print_human_readable(&response);
                        println!();
                    }
                    Err(e) => eprintln!("❌ Error processing: {}", e),
                },
                Err(e) => eprintln!("❌ Parse error: {}", e),
            },
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn print_interactive_help() {
    println!("\n📚 Interactive Mode Commands:");
    println!("• help - Show this help");
    println!("• examples - Show usage examples");
    println!("• quit/exit - Exit interactive mode");
    println!("• Any valid input format to minimize\n");
}

fn handle_examples() -> Result<()> {
    print_examples();
    Ok(())
}

fn print_examples() {
    println!("\n📚 Usage Examples:");
    println!("==================");

    println!("\n1. Function notation:");
    println!("   qmx minimize -i 'f(A,B,C) = Σ(1,3,7)'");

    println!("\n2. With don't cares:");
    println!("   qmx minimize -i 'f(A,B,C) = Σ(1,3,7) + d(2,4)'");

    println!("\n3. Simple format:");
    println!("   qmx minimize -i 'minimize minterms 1,3,7 with 3 variables'");

    println!("\n4. JSON format:");
    println!("   qmx minimize -i '{{\"ones\": [1,3,7], \"num_bits\": 3}}'");

    println!("\n5. Truth table with don't cares:");
    println!("   qmx minimize -i 'truth table: 0110x01x'");

    println!("\n6. From file:");
    println!("   qmx minimize -i input.json");

    println!("\n7. XOR implicants:");
    println!("   qmx minimize -i '{{\"ones\": [1,2,5,6,9,10,13,14], \"num_bits\": 4}}' --xor");

    println!("\n8. Show steps:");
    println!("   qmx minimize -i 'f(A,B) = Σ(1,3)' --show-steps");

    println!("\n9. Interactive mode:");
    println!("   qmx interactive");
}
