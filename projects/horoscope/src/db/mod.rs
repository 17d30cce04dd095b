pub mod schema;
pub mod user;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

pub fn create_pool(database_url: &str) -> Result<SqlitePool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
