use crate::identity::IdentityProvider;

pub async fn login(
    identity: &dyn IdentityProvider,
    admin: bool,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    if !admin {
        anyhow::bail!("Dashboard sign-in is only available with --admin");
    }
    let session = identity.sign_in(email, password).await?;
    println!(
        "Signed in as {} (session valid until {}).",
        session.email,
        session.expires_at.to_rfc3339()
    );
    Ok(())
}

pub async fn logout(identity: &dyn IdentityProvider) -> anyhow::Result<()> {
    identity.sign_out().await?;
    println!("Signed out.");
    Ok(())
}
