pub use super::band::Entity as Band;
pub use super::band_member::Entity as BandMember;
pub use super::rehearsal::Entity as Rehearsal;
pub use super::rehearsal_attendance::Entity as RehearsalAttendance;
pub use super::setlist::Entity as Setlist;
pub use super::setlist_song::Entity as SetlistSong;
pub use super::user::Entity as User;
