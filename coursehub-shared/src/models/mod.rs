/// Typed models over the record store
///
/// # Models
///
/// - `user`: Accounts, roles and enrolled course snapshots
/// - `course`: Courses with their embedded teacher snapshot
///
/// Every operation takes a `&dyn RecordStore` and goes back to the store;
/// nothing is cached.
///
/// # Example
///
/// ```no_run
/// use coursehub_shared::models::course::Course;
/// use coursehub_shared::store::json_file::JsonFileStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = JsonFileStore::new("backend/db");
/// for course in Course::list(&store).await? {
///     println!("{} ({} credit hours)", course.title, course.credit_hours);
/// }
/// # Ok(())
/// # }
/// ```

pub mod course;
pub mod user;
