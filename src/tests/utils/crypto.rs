use openssl::pkey::PKey;
use openssl::rsa::Rsa;
use serde_json::json;

pub fn generate_private_key() -> String {
    let rsa = Rsa::generate(2048).unwrap();
    let pkey = PKey::from_rsa(rsa).unwrap();
    let private_key = pkey.private_key_to_pem_pkcs8().unwrap();

    String::from_utf8(private_key).unwrap()
}

pub fn service_account_json(private_key: &str, token_uri: &str) -> String {
    json!({
        "type": "service_account",
        "project_id": "demo-project",
        "private_key_id": "test-key-id",
        "private_key": private_key,
        "client_email": "gateway@demo-project.iam.gserviceaccount.com",
        "client_id": "1234567890",
        "auth_uri": "https://accounts.google.com/o/oauth2/auth",
        "token_uri": token_uri,
    })
    .to_string()
}
