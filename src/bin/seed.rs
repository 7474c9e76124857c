use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use training_portal_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_courses(&pool).await?;
    let student_id = ensure_student(&pool, "student@example.com", "student123").await?;

    println!("Seed completed. Demo student ID: {student_id}");
    Ok(())
}

async fn ensure_student(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO students (id, full_name, email, phone, password_hash, course)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("Demo Student")
    .bind(email)
    .bind("5551234567")
    .bind(password_hash)
    .bind("Java Full Stack Development")
    .fetch_optional(pool)
    .await?;

    // If the student already exists, fetch the id
    let student_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM students WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured student {email}");
    Ok(student_id)
}

async fn seed_courses(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let courses = vec![
        (
            "Java Full Stack Development",
            "Servlets, Spring and frontend fundamentals",
            "6 months",
            "Online",
            "Yes",
        ),
        (
            "Python Programming",
            "From basics to web services",
            "4 months",
            "Online",
            "Yes",
        ),
        (
            "Web Development",
            "HTML, CSS, JavaScript and a touch of backend",
            "3 months",
            "Hybrid",
            "Yes",
        ),
        (
            "Data Science",
            "Statistics, pandas and model building",
            "6 months",
            "Classroom",
            "Yes",
        ),
        (
            "Cloud Computing",
            "Deploying and operating services in the cloud",
            "4 months",
            "Online",
            "No",
        ),
    ];

    for (name, description, duration, mode, certification) in courses {
        sqlx::query(
            r#"
            INSERT INTO courses (id, course_name, description, duration, mode, certification)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (course_name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(duration)
        .bind(mode)
        .bind(certification)
        .execute(pool)
        .await?;
    }

    println!("Seeded courses");
    Ok(())
}
