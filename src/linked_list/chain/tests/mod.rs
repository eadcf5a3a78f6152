mod construction;
mod derive;
