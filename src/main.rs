use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use forms::{Estimate, Field, LoanForm, Session, SignInForm, submit_loan_application, submit_sign_in};
use loandesk::CliError;
use loandesk::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_FILE};
use loandesk::console::{ConsoleNavigator, ConsoleNotifier, render_estimate, render_schedule};
use loandesk::http::HttpApi;
use loandesk::store::FileTokenStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "loandesk", about = "Sign in and submit loan applications")]
struct Cli {
    #[arg(long, env = "LOANDESK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "LOANDESK_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    token_file: PathBuf,

    #[arg(long, env = "LOANDESK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, help = "Request timeout, 0 disables")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LOANDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Submit a loan application with the stored token.
    Apply(LoanArgs),
    /// Preview the monthly installment without contacting the server.
    Estimate {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long, help = "Term in months")]
        term: u32,
        #[arg(long, default_value_t = false)]
        schedule: bool,
    },
    /// Report whether a token is stored.
    Status,
    /// Forget the stored token.
    Logout,
}

/// Raw loan form values; validation happens in the form controller.
#[derive(Args, Debug)]
struct LoanArgs {
    #[arg(long)]
    applicant_name: String,
    #[arg(long)]
    aadhar_no: String,
    #[arg(long)]
    pan_no: String,
    #[arg(long)]
    bank_details: String,
    #[arg(long)]
    account_no: String,
    #[arg(long)]
    ifsc_code: String,
    #[arg(long)]
    loan_amount: String,
    #[arg(long, help = "Business, Personal, Home, Vehicle, Education or Other")]
    loan_type: String,
    #[arg(long)]
    annual_interest_rate: String,
    #[arg(long, help = "Term in months")]
    loan_term: String,
    #[arg(long, help = "Salaried, Non-Salaried, Unemployed, Student or Others")]
    employment_details: String,
}

impl LoanArgs {
    fn into_form(self) -> LoanForm {
        let mut form = LoanForm::new();
        let values = [
            (Field::ApplicantName, self.applicant_name),
            (Field::AadharNo, self.aadhar_no),
            (Field::PanNo, self.pan_no),
            (Field::BankDetails, self.bank_details),
            (Field::AccountNo, self.account_no),
            (Field::IfscCode, self.ifsc_code),
            (Field::LoanAmount, self.loan_amount),
            (Field::LoanType, self.loan_type),
            (Field::AnnualInterestRate, self.annual_interest_rate),
            (Field::LoanTerm, self.loan_term),
            (Field::EmploymentDetails, self.employment_details),
        ];
        for (field, value) in values {
            form.set(field, value);
        }
        form
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.already_reported() {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::new(&cli.base_url, cli.token_file, cli.timeout_secs)?;
    let session = Session::new(FileTokenStore::new(&config.token_file));

    match cli.command {
        Command::Login { email, password } => {
            let api = HttpApi::new(&config)?;
            let mut form = SignInForm::new();
            form.set(Field::Email, email);
            form.set(Field::Password, password);
            submit_sign_in(&mut form, &api, &session, &ConsoleNotifier, &ConsoleNavigator).await?;
            Ok(())
        }
        Command::Apply(args) => {
            let api = HttpApi::new(&config)?;
            let mut form = args.into_form();
            submit_loan_application(&mut form, &api, &session, &ConsoleNotifier, &ConsoleNavigator).await?;
            Ok(())
        }
        Command::Estimate { amount, rate, term, schedule } => {
            let estimate = Estimate::compute(amount, rate, term).ok_or_else(|| {
                CliError::InvalidEstimate("amount and rate must be non-negative and term at least 1".to_owned())
            })?;
            println!("{}", render_estimate(&estimate));
            if schedule {
                println!("\n{}", render_schedule(&estimate));
            }
            Ok(())
        }
        Command::Status => {
            if session.is_signed_in() {
                println!("signed in ({})", session.store().path().display());
            } else {
                println!("signed out");
            }
            Ok(())
        }
        Command::Logout => {
            session.sign_out()?;
            tracing::info!(path = %config.token_file.display(), "token cleared");
            println!("signed out");
            Ok(())
        }
    }
}
