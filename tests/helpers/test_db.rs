use boxoffice::database::Database;
use boxoffice::models::{Administrator, Event, User};
use boxoffice::services::auth::hash_password;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.init_schema()
        .await
        .expect("Failed to initialize test schema");

    db
}

pub async fn teardown_test_db(db: Database) {
    drop(db);
    // Test database files are cleaned up by .gitignore / CI workspace reset
}

pub async fn create_test_user(db: &Database, nickname: &str, login_name: &str) -> User {
    let password_hash = hash_password("test-password").expect("hash");
    let user = User::new(nickname.to_string(), login_name.to_string(), password_hash);
    db.create_user(&user).await.expect("create user");
    user
}

pub async fn create_test_administrator(db: &Database, login_name: &str) -> Administrator {
    let password_hash = hash_password("admin-password").expect("hash");
    let admin = Administrator::new("admin".to_string(), login_name.to_string(), password_hash);
    db.create_administrator(&admin).await.expect("create admin");
    admin
}

pub async fn create_test_event(db: &Database, title: &str, public: bool, price: i64) -> Event {
    let event = Event::new(title.to_string(), public, price);
    db.create_event(&event).await.expect("create event");
    event
}
