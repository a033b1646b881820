use std::process;

use clap::Parser;

use algebra_quiz::{Difficulty, Quiz, QuizOptions, Topic, DEFAULT_QUIZ_LEN};

#[derive(Parser, Debug)]
#[command(version, about = "Randomized abstract-algebra quizzes in the terminal", long_about = None)]
struct Args {
    /// Topic to draw questions from
    #[arg(short, long, value_enum, default_value_t = Topic::Groups)]
    topic: Topic,

    /// Pre-select a difficulty and skip the setup screen
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Number of questions per quiz
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUIZ_LEN)]
    questions: usize,

    /// Seed for the random source (reproducible quizzes)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON line with the final result after the quiz exits
    #[arg(long)]
    report: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = match Quiz::new(QuizOptions {
        topic: args.topic,
        difficulty: args.difficulty,
        questions: args.questions,
        seed: args.seed,
    }) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    match quiz.run() {
        Ok(report) => {
            if args.report {
                if let Some(report) = report {
                    let json =
                        serde_json::to_string(&report).expect("report serializes to JSON");
                    println!("{}", json);
                }
            }
        }
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            process::exit(1);
        }
    }
}
