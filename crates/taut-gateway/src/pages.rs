/// Renders the landing page: a curl usage hint plus a submission form.
pub fn index_page(base_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>URL Shortener</title>
    <meta name="description" content="URL shortener. Shortens URLs." />
</head>
<body>
<pre>
Shorten a URL using curl:
curl -F "url=https://example.com/cats.jpg" {base_url}/

Or use this form:
</pre>
<form id="frm" method="post" enctype="multipart/form-data">
<input type="text" name="url" id="url" placeholder="https://example.com/cats.jpg" />
<input type="submit" value="shorten"/>
</form>
</body>
</html>
"#
    )
}
