mod game;
mod loadout;
mod user;
