mod band;
mod band_member;
mod rehearsal;
mod setlist;
mod user;
