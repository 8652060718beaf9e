pub use crate::route::PostId;

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostRecord {
    pub id: PostId,
    pub title: String,
    pub text: String,
}
