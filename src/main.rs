use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use std::error::Error;
use tilecolor::{
    front_end::read_graph,
    graph::read_sqlite,
    layer::{layer_specs, DEFAULT_PREFIX},
    scorer::EdgeScores,
    ColorAssigner, Palette, ViewGraph,
};

fn load_graph(matches: &ArgMatches) -> tilecolor::Result<ViewGraph> {
    let path = matches.value_of("GRAPH").unwrap();
    if matches.is_present("sqlite") {
        read_sqlite(path)
    } else {
        read_graph(path)
    }
}

fn create_assigner(matches: &ArgMatches) -> Result<ColorAssigner, Box<dyn Error>> {
    let mut assigner = ColorAssigner::new()
        .n_colors(matches.value_of("n-colors").unwrap().parse()?)
        .palette(matches.value_of("palette").unwrap().parse::<Palette>()?);
    if let Some(sources) = matches.value_of("sources") {
        assigner = assigner.betweenness_sources(sources.parse()?);
    }
    Ok(assigner)
}

fn handle_assign(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let assignment = create_assigner(matches)?.assign(&graph)?;
    print!("{}", assignment.colors());
    Ok(())
}

fn handle_scores(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let sources = matches
        .value_of("sources")
        .map(|s| s.parse::<usize>())
        .transpose()?;
    for row in EdgeScores::with_sources(&graph, sources).rows(&graph) {
        println!("{}", row);
    }
    Ok(())
}

fn handle_trace(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let assignment = create_assigner(matches)?.assign(&graph)?;
    for round in assignment.rounds() {
        println!("{}", round);
    }
    Ok(())
}

fn handle_layers(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = load_graph(matches)?;
    let channels: Vec<&str> = matches.values_of("CHANNELS").unwrap().collect();
    let colors = if matches.is_present("by-channel") {
        None
    } else {
        Some(create_assigner(matches)?.assign(&graph)?.into_colors())
    };
    for spec in layer_specs(
        graph.views(),
        &channels,
        colors.as_ref(),
        Some(matches.value_of("prefix").unwrap()),
    ) {
        println!("{}", spec);
    }
    Ok(())
}

fn graph_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("GRAPH").required(true),
        Arg::with_name("sqlite")
            .help("Reads GRAPH as a SQLite3 database")
            .long("sqlite")
            .takes_value(false),
        Arg::with_name("sources")
            .help("Uses only the first N views as betweenness sources")
            .long("sources")
            .value_name("N")
            .takes_value(true),
    ]
}

fn assign_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("n-colors")
            .help("Upper bound on distinct color classes")
            .long("n-colors")
            .short("n")
            .takes_value(true)
            .default_value("2"),
        Arg::with_name("palette")
            .help("Comma separated color names")
            .long("palette")
            .takes_value(true)
            .default_value("red,green,blue,gray"),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("assign")
                .about("Assigns a palette color to every view")
                .after_help(
                    r"GRAPH is a text file such as

  (graph (views 0 1 2)
         (edges (0 1 0.9) (1 2 0.5) (2 0 0.3)))

or, with --sqlite, a SQLite3 file with the following schema:

  CREATE TABLE views (vid INT);
  CREATE TABLE overlaps (src INT, dst INT, overlap REAL);
",
                )
                .args(&graph_args())
                .args(&assign_args()),
        )
        .subcommand(
            SubCommand::with_name("scores")
                .about("Displays overlap, betweenness and score of every edge")
                .args(&graph_args()),
        )
        .subcommand(
            SubCommand::with_name("trace")
                .about("Displays every pruning round of the assignment")
                .args(&graph_args())
                .args(&assign_args()),
        )
        .subcommand(
            SubCommand::with_name("layers")
                .about("Displays display layer names and colormaps")
                .args(&graph_args())
                .args(&assign_args())
                .arg(Arg::with_name("CHANNELS").required(true).multiple(true))
                .arg(
                    Arg::with_name("by-channel")
                        .help("Colors layers by channel name instead of position")
                        .long("by-channel")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("prefix")
                        .long("prefix")
                        .takes_value(true)
                        .default_value(DEFAULT_PREFIX),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("assign") {
        handle_assign(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("scores") {
        handle_scores(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("trace") {
        handle_trace(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("layers") {
        handle_layers(matches)?;
    }
    Ok(())
}
