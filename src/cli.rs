use std::env;

pub struct CliArgs {
    /// Scenario to replay. The built-in demonstration runs when absent.
    pub input_file_path: Option<String>,
}

impl CliArgs {
    pub fn load() -> Self {
        let args: Vec<String> = env::args().collect();

        let input_file_path = args.get(1).map(|s| s.to_owned());

        CliArgs { input_file_path }
    }
}
