mod not_found;
mod rate_limit;
mod validation;
