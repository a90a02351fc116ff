use sqlx::SqlitePool;

const LESSONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS lessons (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        subject TEXT NOT NULL,
        content TEXT NOT NULL,
        outline TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

const STUDENT_PROGRESS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS student_progress (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_name TEXT NOT NULL,
        lesson_id INTEGER NOT NULL,
        quiz_score INTEGER NOT NULL,
        completion_status TEXT NOT NULL,
        study_time INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        FOREIGN KEY (lesson_id) REFERENCES lessons (id)
    )
"#;

const GENERATED_IMAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS generated_images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lesson_id INTEGER NOT NULL,
        prompt TEXT NOT NULL,
        image_path TEXT NOT NULL,
        created_at TEXT NOT NULL,
        FOREIGN KEY (lesson_id) REFERENCES lessons (id)
    )
"#;

const USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

/// 幂等建表，重复调用不会影响已有数据
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [
        LESSONS_TABLE,
        STUDENT_PROGRESS_TABLE,
        GENERATED_IMAGES_TABLE,
        USERS_TABLE,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
