use crate::models::tag::TagRule;

pub const DOCKER_TAG: &str = "docker";
pub const GITHUB_ACTIONS_TAG: &str = "github-actions";

/// Frameworks that are also looked for in the raw text of `requirements.txt`.
pub const PYTHON_TEXT_FRAMEWORKS: [&str; 3] = ["django", "flask", "fastapi"];

/// The built-in rule table. Order matters: it is the order rules are
/// evaluated in and the order they appear in [`super::TaggingEngine::rules`].
pub fn default_rules() -> Vec<TagRule> {
    vec![
        // Frontend
        TagRule::framework("react", &["react", "@types/react"]),
        TagRule::framework("nextjs", &["next"]),
        TagRule::framework("vue", &["vue"]),
        TagRule::framework("nuxt", &["nuxt"]),
        TagRule::framework("angular", &["@angular/core", "@angular/common"]),
        TagRule::framework("svelte", &["svelte"]),
        TagRule::framework("solid", &["solid-js"]),
        TagRule::framework("preact", &["preact"]),
        // Backend
        TagRule::framework("express", &["express"]),
        TagRule::framework("fastify", &["fastify"]),
        TagRule::framework("nestjs", &["@nestjs/core", "nestjs"]),
        TagRule::framework("koa", &["koa"]),
        TagRule::framework("hapi", &["@hapi/hapi", "hapi"]),
        TagRule::framework("django", &["django", "Django"]),
        TagRule::framework("flask", &["flask", "Flask"]),
        TagRule::framework("fastapi", &["fastapi", "FastAPI"]),
        // Meta-frameworks, mobile, desktop
        TagRule::framework("remix", &["@remix-run/react", "@remix-run/node"]),
        TagRule::framework("gatsby", &["gatsby"]),
        TagRule::framework("astro", &["astro"]),
        TagRule::framework("react-native", &["react-native"]),
        TagRule::framework("expo", &["expo"]),
        TagRule::framework("electron", &["electron"]),
        TagRule::framework("tauri", &["@tauri-apps/api", "@tauri-apps/cli"]),
        // Bundlers
        TagRule::tool("webpack", &["webpack"]),
        TagRule::tool("vite", &["vite"]),
        TagRule::tool("rollup", &["rollup"]),
        TagRule::tool("esbuild", &["esbuild"]),
        TagRule::tool("parcel", &["parcel"]),
        TagRule::tool("turbopack", &["turbopack"]),
        // Quality
        TagRule::tool(
            "testing",
            &[
                "jest",
                "vitest",
                "mocha",
                "chai",
                "@testing-library/react",
                "cypress",
                "playwright",
                "@playwright/test",
                "selenium-webdriver",
            ],
        ),
        TagRule::tool("linting", &["eslint", "tslint"]),
        TagRule::tool("formatting", &["prettier"]),
        TagRule::tool("typescript", &["typescript"]),
        // State
        TagRule::tool("redux", &["redux", "@reduxjs/toolkit"]),
        TagRule::tool("mobx", &["mobx"]),
        TagRule::tool("zustand", &["zustand"]),
        TagRule::tool("recoil", &["recoil"]),
        TagRule::tool("jotai", &["jotai"]),
        // Styling
        TagRule::tool("tailwind", &["tailwindcss"]),
        TagRule::tool("styled-components", &["styled-components"]),
        TagRule::tool("emotion", &["@emotion/react", "@emotion/styled"]),
        TagRule::tool("sass", &["sass", "node-sass"]),
        // Data
        TagRule::tool(
            "graphql",
            &["graphql", "apollo-server", "@apollo/client", "urql", "relay-runtime"],
        ),
        TagRule::tool("prisma", &["prisma", "@prisma/client"]),
        TagRule::tool("typeorm", &["typeorm"]),
        TagRule::tool("sequelize", &["sequelize"]),
        TagRule::tool("mongoose", &["mongoose"]),
        TagRule::tool("drizzle", &["drizzle-orm"]),
        // Infrastructure
        TagRule::tool(DOCKER_TAG, &["Dockerfile"]),
        TagRule::tool(GITHUB_ACTIONS_TAG, &[".github/workflows"]),
    ]
}
