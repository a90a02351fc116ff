// 数据库模块
// 包含建表语句、实体定义和各实体的存储操作

pub mod models;
pub mod operations;
pub mod schema;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use models::image::GeneratedImage;
pub use models::lesson::{Lesson, LessonEntity};
pub use models::progress::{CompletionStatus, ProgressRecord, ProgressSummary};
pub use models::user::UserAccount;
pub use operations::image::ImageOperation;
pub use operations::lesson::LessonOperation;
pub use operations::progress::ProgressOperation;
pub use operations::user::UserOperation;
pub use schema::create_schema;

/// 创建 SQLite 连接池，数据库文件不存在时自动创建
///
/// 外键只作声明用途，不在连接上启用：进度记录允许引用尚不存在的课程。
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    // 每个内存数据库连接都是独立的库，只能保留单个常驻连接
    if database_url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
