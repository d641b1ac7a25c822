use math_tutor_api::classifier::QuestionClassifier;
use math_tutor_api::solvers;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let question = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let question = if question.trim().is_empty() {
        "In a right triangle, AB = 7 cm and BC = 24 cm. Find sec C + cot A.".to_string()
    } else {
        question
    };

    info!("Solving question: {}", question);

    let topic = QuestionClassifier::classify(&question);
    info!("Classified as: {}", topic);

    let solution = solvers::solve(topic, &question);

    println!("\n=== SOLUTION FIELDS ===");
    println!("topic: {}", topic);
    println!("{}", serde_json::to_string_pretty(&solution)?);

    Ok(())
}
