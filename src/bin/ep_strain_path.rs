use elastoplast::base::Error;
use elastoplast::util::{SSCurve, StrainPath, StressStrainPlot};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "ep_strain_path",
    about = "Integrates a strain path at a single material point and writes the results"
)]
struct Options {
    /// JSON file with the input data
    input: String,

    /// JSON file with the results
    output: String,

    /// Generates an SVG figure with the stress-strain curve
    #[structopt(long)]
    svg: Option<String>,

    /// Index of the strain/stress component in the figure
    #[structopt(long, default_value = "0")]
    component: usize,

    /// Prints the backward Euler iterations
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    // parse options
    let options = Options::from_args();

    // run
    let mut input = StrainPath::read_json(&options.input)?;
    if options.verbose {
        input.settings.verbose_iterations = true;
    }
    let results = input.run()?;
    results.write_json(&options.output)?;

    // figure
    if let Some(svg) = &options.svg {
        let mut plot = StressStrainPlot::new();
        let mut curve = SSCurve::new();
        curve.strain_index = options.component;
        curve.stress_index = options.component;
        curve.stress_scale = 1e6;
        plot.stress_strain(&results, Some(curve))?;
        plot.save(svg)?;
    }

    // message
    let nonconv = results.not_converged.iter().filter(|x| **x).count();
    let thin_line = format!("{:─^1$}", "", options.output.len());
    println!("\n{}", thin_line);
    println!("{} steps computed ({} not converged); the results file is:", results.stresses.len(), nonconv);
    println!("{}", options.output);
    println!("{}\n", thin_line);
    Ok(())
}
