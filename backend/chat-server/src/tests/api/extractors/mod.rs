mod current_identity;
mod json;
