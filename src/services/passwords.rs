use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

static ENGINE: OnceLock<Argon2> = OnceLock::new();

fn engine() -> &'static Argon2<'static> {
    ENGINE.get_or_init(|| {
        let params = Params::new(
            64 * 1024, // 64MB memory (m)
            3,         // iterations (t)
            4,         // parallelism lanes (p)
            None,      // default hash length
        )
        .expect("Invalid Argon2 parameters");

        Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
    })
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = engine().hash_password(password.as_bytes(), &salt)?;

    Ok(hashed.to_string())
}

pub fn verify(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)?;

    match engine().verify_password(password.as_bytes(), &parsed) {
        Ok(_) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
